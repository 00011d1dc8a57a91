//! Selection set operations for [`Items`].
//!
//! The selection is keyed by identifier, not position, so it survives
//! filtering, sorting and paging. A filter hiding a selected element does not
//! deselect it.

use super::Items;
use std::collections::HashSet;

impl<T> Items<T> {
    #[must_use]
    pub fn select_none(&self) -> Self {
        self.with_selected(HashSet::new())
    }

    /// Select exactly the elements of the current page.
    #[must_use]
    pub fn select_page(&self) -> Self {
        let selected = self.page().into_iter().map(|item| self.identify(item)).collect();
        self.with_selected(selected)
    }

    /// Select exactly the elements passing the current filters.
    #[must_use]
    pub fn select_all(&self) -> Self {
        let selected = self.working().into_iter().map(|item| self.identify(item)).collect();
        self.with_selected(selected)
    }

    /// Add `item` to the selection if `select` is true, remove it otherwise.
    /// Items whose identifier is not in [`Items::all`] are not added.
    #[must_use]
    pub fn select(&self, item: &T, select: bool) -> Self {
        let id = self.identify(item);
        if select && !self.contains_id(&id) {
            return self.clone();
        }
        let mut selected = self.selected.clone();
        if select {
            selected.insert(id);
        } else {
            selected.remove(&id);
        }
        self.with_selected(selected)
    }

    /// Single selection: `item` becomes the only selected element. Unknown
    /// items leave the selection unchanged.
    #[must_use]
    pub fn select_only(&self, item: &T) -> Self {
        let id = self.identify(item);
        if !self.contains_id(&id) {
            return self.clone();
        }
        self.with_selected(HashSet::from([id]))
    }

    #[must_use]
    pub fn toggle_selection(&self, item: &T) -> Self {
        self.select(item, !self.is_selected(item))
    }

    pub fn is_selected(&self, item: &T) -> bool {
        self.selected.contains(&self.identify(item))
    }

    /// Identifiers of the selected elements.
    pub fn selected(&self) -> &HashSet<String> {
        &self.selected
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Selected elements, in the order of [`Items::all`].
    ///
    /// Identifiers without a matching element in `all` (for example after
    /// `add_all` replaced the data) are skipped.
    pub fn selection(&self) -> Vec<&T> {
        if self.selected.is_empty() {
            return Vec::new();
        }
        self.all().iter().filter(|item| self.is_selected(item)).collect()
    }

    fn contains_id(&self, id: &str) -> bool {
        self.all().iter().any(|item| self.identify(item) == id)
    }

    fn with_selected(&self, selected: HashSet<String>) -> Self {
        Self {
            selected,
            ..self.clone()
        }
    }
}
