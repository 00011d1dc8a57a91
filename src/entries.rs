//! Ordered entries with a single active entry.
//!
//! Backs tabs, navigation lists and wizard steps: components that show a set
//! of entries and highlight exactly one of them.

use log::debug;
use std::fmt;
use std::sync::Arc;

use crate::items::Identify;

/// Immutable list of entries with at most one active entry.
pub struct Entries<T> {
    identify: Identify<T>,
    entries: Arc<Vec<T>>,
    active: Option<String>,
}

impl<T> Entries<T> {
    pub fn new<F>(identify: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            identify: Arc::new(identify),
            entries: Arc::new(Vec::new()),
            active: None,
        }
    }

    /// Replace all entries.
    ///
    /// The active entry is kept if an entry with the same identifier is still
    /// present. Otherwise the first entry becomes active.
    #[must_use]
    pub fn add_all<I>(&self, entries: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let entries: Vec<T> = entries.into_iter().collect();
        let keep = self
            .active
            .as_ref()
            .filter(|id| entries.iter().any(|entry| (self.identify)(entry) == **id))
            .cloned();
        let active = keep.or_else(|| entries.first().map(|entry| (self.identify)(entry)));
        Self {
            identify: Arc::clone(&self.identify),
            entries: Arc::new(entries),
            active,
        }
    }

    /// Activate the entry with identifier `id`. Unknown identifiers are
    /// ignored.
    #[must_use]
    pub fn select(&self, id: &str) -> Self {
        if self.position(id).is_none() {
            debug!("Ignoring selection of unknown entry '{}'", id);
            return self.clone();
        }
        self.with_active(Some(id.to_string()))
    }

    #[must_use]
    pub fn select_entry(&self, entry: &T) -> Self {
        self.select(&(self.identify)(entry))
    }

    /// Activate the entry after the active one, wrapping to the first.
    #[must_use]
    pub fn next(&self) -> Self {
        self.step(|index, len| (index + 1) % len)
    }

    /// Activate the entry before the active one, wrapping to the last.
    #[must_use]
    pub fn previous(&self) -> Self {
        self.step(|index, len| (index + len - 1) % len)
    }

    fn step(&self, advance: impl Fn(usize, usize) -> usize) -> Self {
        let len = self.entries.len();
        if len == 0 {
            return self.clone();
        }
        let index = match self.active.as_deref().and_then(|id| self.position(id)) {
            Some(index) => advance(index, len),
            None => 0,
        };
        self.with_active(Some((self.identify)(&self.entries[index])))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| (self.identify)(entry) == id)
    }

    fn with_active(&self, active: Option<String>) -> Self {
        Self {
            active,
            ..self.clone()
        }
    }

    /// The active entry, if any.
    pub fn active(&self) -> Option<&T> {
        self.active.as_deref().and_then(|id| self.position(id)).map(|index| &self.entries[index])
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, entry: &T) -> bool {
        self.active.as_deref() == Some((self.identify)(entry).as_str())
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Clone for Entries<T> {
    fn clone(&self) -> Self {
        Self {
            identify: Arc::clone(&self.identify),
            entries: Arc::clone(&self.entries),
            active: self.active.clone(),
        }
    }
}

impl<T> fmt::Debug for Entries<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entries")
            .field("entries", &self.entries.len())
            .field("active", &self.active)
            .finish()
    }
}
