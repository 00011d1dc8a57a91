use std::fmt;
use std::sync::Arc;

/// Predicate shared between snapshots.
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// A named filter predicate.
///
/// The name is the key in the filter registry of an
/// [`Items`](super::Items) collection: adding a filter under an existing
/// name replaces it, and the name is what removes it again.
pub struct ItemFilter<T> {
    name: String,
    predicate: Predicate<T>,
}

impl<T> ItemFilter<T> {
    pub fn new<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// Case-insensitive substring match on a text extracted from each element,
    /// the usual backing for a toolbar search box.
    pub fn contains<F>(name: impl Into<String>, query: &str, text: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        let query = query.to_lowercase();
        Self::new(name, move |item| text(item).to_lowercase().contains(&query))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn matches(&self, item: &T) -> bool {
        (self.predicate)(item)
    }

    pub(crate) fn into_parts(self) -> (String, Predicate<T>) {
        (self.name, self.predicate)
    }
}

impl<T> Clone for ItemFilter<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T> fmt::Debug for ItemFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemFilter").field("name", &self.name).finish_non_exhaustive()
    }
}
