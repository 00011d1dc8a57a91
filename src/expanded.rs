//! Expand/collapse state keyed by identifier.
//!
//! Used by accordions, expandable data list rows and tree views. In single
//! mode at most one identifier is expanded at a time, which is how an
//! accordion with "fixed" behavior works.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandedStore {
    expanded: BTreeSet<String>,
    single: bool,
}

impl ExpandedStore {
    /// Store allowing any number of expanded identifiers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store keeping at most one identifier expanded.
    pub fn single() -> Self {
        Self {
            expanded: BTreeSet::new(),
            single: true,
        }
    }

    pub fn is_single(&self) -> bool {
        self.single
    }

    #[must_use]
    pub fn expand(&self, id: &str) -> Self {
        let mut expanded = if self.single { BTreeSet::new() } else { self.expanded.clone() };
        expanded.insert(id.to_string());
        self.with_expanded(expanded)
    }

    #[must_use]
    pub fn collapse(&self, id: &str) -> Self {
        let mut expanded = self.expanded.clone();
        expanded.remove(id);
        self.with_expanded(expanded)
    }

    #[must_use]
    pub fn toggle(&self, id: &str) -> Self {
        if self.is_expanded(id) {
            self.collapse(id)
        } else {
            self.expand(id)
        }
    }

    /// Expand every identifier. In single mode only the last one stays
    /// expanded.
    #[must_use]
    pub fn expand_all<I, S>(&self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter().fold(self.clone(), |store, id| store.expand(id.as_ref()))
    }

    #[must_use]
    pub fn collapse_all(&self) -> Self {
        self.with_expanded(BTreeSet::new())
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Expanded identifiers in sorted order.
    pub fn expanded(&self) -> Vec<&str> {
        self.expanded.iter().map(String::as_str).collect()
    }

    fn with_expanded(&self, expanded: BTreeSet<String>) -> Self {
        Self {
            expanded,
            single: self.single,
        }
    }
}
