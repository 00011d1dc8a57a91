//! Paged, filtered, sorted and selectable item collections.
//!
//! [`Items`] is an immutable snapshot: every transition (`add_all`,
//! `add_filter`, `sort_with`, `select_all`, `goto_next_page`, ...) returns a
//! new snapshot and leaves the original untouched. Snapshots share the source
//! elements through an `Arc`, so cloning one never clones elements.
//!
//! The working set (filtered and sorted view) is always recomputed from the
//! full source set, never incrementally, so it is consistent with the current
//! filters and sort regardless of the order in which they were applied.

use log::trace;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

/// Named filter predicates
pub mod filter;

/// Pagination window
pub mod page_info;

/// Selection set operations
pub mod selection;

/// Sort column, label, comparator and direction
pub mod sort_info;

pub use filter::{ItemFilter, Predicate};
pub use page_info::PageInfo;
pub use sort_info::{Comparator, SortInfo};

/// Function producing the identifier of an element.
pub type Identify<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Immutable collection with filtering, sorting, paging and an identity-keyed
/// selection.
pub struct Items<T> {
    identify: Identify<T>,
    all: Arc<Vec<T>>,
    /// Indices into `all`, filtered and sorted.
    working: Arc<Vec<usize>>,
    page_info: PageInfo,
    filters: HashMap<String, Predicate<T>>,
    selected: HashSet<String>,
    sort_info: Option<SortInfo<T>>,
}

impl<T> Items<T> {
    /// Create an empty collection. `identify` must return a stable, unique
    /// identifier per logical element; elements sharing an identifier are
    /// merged by the selection.
    pub fn new<F>(identify: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            identify: Arc::new(identify),
            all: Arc::new(Vec::new()),
            working: Arc::new(Vec::new()),
            page_info: PageInfo::default(),
            filters: HashMap::new(),
            selected: HashSet::new(),
            sort_info: None,
        }
    }

    /// Create an empty collection with a custom page size.
    ///
    /// # Errors
    /// Returns [`ItemsError::InvalidArgument`] if `page_size` is zero.
    pub fn with_page_size<F>(identify: F, page_size: usize) -> Result<Self, ItemsError>
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self::new(identify).page_size(page_size)
    }

    // ------------------------------------------------------------------
    // Data, filters and sort

    /// Replace all elements. Current filters and sort are applied right away.
    #[must_use]
    pub fn add_all<I>(&self, elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            all: Arc::new(elements.into_iter().collect()),
            ..self.clone()
        }
        .recomputed()
    }

    /// Register `predicate` under `name`, replacing any filter with that name.
    #[must_use]
    pub fn add_filter<F>(&self, name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.add_item_filter(ItemFilter::new(name, predicate))
    }

    #[must_use]
    pub fn add_item_filter(&self, filter: ItemFilter<T>) -> Self {
        let (name, predicate) = filter.into_parts();
        let mut items = self.clone();
        items.filters.insert(name, predicate);
        items.recomputed()
    }

    /// Remove the filter registered under `name`. Unknown names are ignored.
    #[must_use]
    pub fn remove_filter(&self, name: &str) -> Self {
        let mut items = self.clone();
        items.filters.remove(name);
        items.recomputed()
    }

    /// Make `sort_info` the active sort.
    #[must_use]
    pub fn sort_with(&self, sort_info: SortInfo<T>) -> Self {
        Self {
            sort_info: Some(sort_info),
            ..self.clone()
        }
        .recomputed()
    }

    fn recomputed(mut self) -> Self {
        let working = self.compute_working();
        trace!(
            "Recomputed working set: {} of {} items, {} filter(s), sort: {:?}",
            working.len(),
            self.all.len(),
            self.filters.len(),
            self.sort_info.as_ref().map(|sort| (sort.id(), sort.is_ascending()))
        );
        self.page_info = self.page_info.with_total(working.len());
        self.working = Arc::new(working);
        self
    }

    fn compute_working(&self) -> Vec<usize> {
        let mut working: Vec<usize> = if self.filters.is_empty() {
            (0..self.all.len()).collect()
        } else {
            self.all
                .iter()
                .enumerate()
                .filter(|(_, item)| self.filters.values().all(|predicate| predicate(*item)))
                .map(|(index, _)| index)
                .collect()
        };

        if let Some(sort_info) = &self.sort_info {
            let compare = sort_info.effective_comparator();
            working.sort_by(|a, b| compare(&self.all[*a], &self.all[*b]));
        }
        working
    }

    // ------------------------------------------------------------------
    // Paging

    #[must_use]
    pub fn goto_first_page(&self) -> Self {
        self.with_page_info(self.page_info.goto_first_page())
    }

    #[must_use]
    pub fn goto_previous_page(&self) -> Self {
        self.with_page_info(self.page_info.goto_previous_page())
    }

    #[must_use]
    pub fn goto_next_page(&self) -> Self {
        self.with_page_info(self.page_info.goto_next_page())
    }

    #[must_use]
    pub fn goto_last_page(&self) -> Self {
        self.with_page_info(self.page_info.goto_last_page())
    }

    #[must_use]
    pub fn goto_page(&self, page: usize) -> Self {
        self.with_page_info(self.page_info.goto_page(page))
    }

    /// Change the page size.
    ///
    /// # Errors
    /// Returns [`ItemsError::InvalidArgument`] if `page_size` is zero.
    pub fn page_size(&self, page_size: usize) -> Result<Self, ItemsError> {
        Ok(self.with_page_info(self.page_info.with_page_size(page_size)?))
    }

    fn with_page_info(&self, page_info: PageInfo) -> Self {
        Self {
            page_info,
            ..self.clone()
        }
    }

    // ------------------------------------------------------------------
    // Queries

    /// All elements, unfiltered and unsorted, in the order they were added.
    pub fn all(&self) -> &[T] {
        &self.all
    }

    /// Elements passing every filter, in sort order.
    pub fn working(&self) -> Vec<&T> {
        self.working.iter().map(|index| &self.all[*index]).collect()
    }

    /// Elements of the current page. Empty if nothing passes the filters.
    pub fn page(&self) -> Vec<&T> {
        let range = self.page_info.range();
        if range.is_empty() {
            return Vec::new();
        }
        let (from, to) = (*range.start() - 1, (*range.end()).min(self.working.len()));
        self.working[from..to].iter().map(|index| &self.all[*index]).collect()
    }

    pub fn page_info(&self) -> &PageInfo {
        &self.page_info
    }

    pub fn sort_info(&self) -> Option<&SortInfo<T>> {
        self.sort_info.as_ref()
    }

    pub fn has_filter(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }

    /// Names of the registered filters, sorted.
    pub fn filter_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.filters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Identifier of `item` as produced by the identity function.
    pub fn identify(&self, item: &T) -> String {
        (self.identify)(item)
    }

    /// Number of elements before filtering.
    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

impl<T> Clone for Items<T> {
    fn clone(&self) -> Self {
        Self {
            identify: Arc::clone(&self.identify),
            all: Arc::clone(&self.all),
            working: Arc::clone(&self.working),
            page_info: self.page_info,
            filters: self.filters.clone(),
            selected: self.selected.clone(),
            sort_info: self.sort_info.clone(),
        }
    }
}

impl<T> fmt::Debug for Items<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Items")
            .field("all", &self.all.len())
            .field("working", &self.working.len())
            .field("page_info", &self.page_info)
            .field("filters", &self.filter_names())
            .field("selected", &self.selected.len())
            .field("sort_info", &self.sort_info)
            .finish()
    }
}

/// Error types for item collection operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
