use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Three-way comparator shared between snapshots.
pub type Comparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Active sort of an [`Items`](super::Items) collection: sort column id,
/// display label, comparator and direction.
///
/// The comparator is always stored in ascending form; use
/// [`SortInfo::effective_comparator`] to get the direction-aware one.
///
/// Two sort infos are equal when their `id` and `ascending` flag match,
/// regardless of the comparator. This lets a table header tell "same column,
/// flip direction" apart from "new column" without comparing closures.
pub struct SortInfo<T> {
    id: String,
    label: String,
    comparator: Comparator<T>,
    ascending: bool,
}

impl<T> SortInfo<T> {
    /// Create an ascending sort info.
    pub fn new<F>(id: impl Into<String>, label: impl Into<String>, comparator: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            label: label.into(),
            comparator: Arc::new(comparator),
            ascending: true,
        }
    }

    /// Sort by a key extracted from each element.
    pub fn by_key<K, F>(id: impl Into<String>, label: impl Into<String>, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self::new(id, label, move |a, b| key(a).cmp(&key(b)))
    }

    /// Same sort with the given direction.
    #[must_use]
    pub fn ascending(&self, ascending: bool) -> Self {
        Self {
            ascending,
            ..self.clone()
        }
    }

    /// Same sort in the opposite direction.
    #[must_use]
    pub fn toggle(&self) -> Self {
        self.ascending(!self.ascending)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// The comparator as supplied, ignoring direction.
    pub fn comparator(&self) -> &Comparator<T> {
        &self.comparator
    }

    /// The comparator as supplied when ascending, reversed otherwise.
    pub fn effective_comparator(&self) -> impl Fn(&T, &T) -> Ordering + '_ {
        move |a, b| {
            let ordering = (self.comparator)(a, b);
            if self.ascending {
                ordering
            } else {
                ordering.reverse()
            }
        }
    }
}

impl<T> Clone for SortInfo<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            comparator: Arc::clone(&self.comparator),
            ascending: self.ascending,
        }
    }
}

impl<T> PartialEq for SortInfo<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.ascending == other.ascending
    }
}

impl<T> Eq for SortInfo<T> {}

impl<T> Hash for SortInfo<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.ascending.hash(state);
    }
}

impl<T> fmt::Debug for SortInfo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortInfo")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("ascending", &self.ascending)
            .finish_non_exhaustive()
    }
}
