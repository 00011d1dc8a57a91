//! Snapshot store for [`Items`] collections.
//!
//! The store holds the current snapshot and is the single writer: each
//! update applies a pure transition to the latest snapshot and publishes the
//! result to every subscriber. Subscribers always receive whole snapshots and
//! should derive `page()` and `selection()` from the latest one rather than
//! caching them across updates.

use log::debug;
use tokio::sync::watch;

use crate::items::{Items, ItemsError};

pub struct ItemsStore<T> {
    sender: watch::Sender<Items<T>>,
}

impl<T> ItemsStore<T> {
    pub fn new(items: Items<T>) -> Self {
        let (sender, _) = watch::channel(items);
        Self { sender }
    }

    /// Latest snapshot.
    pub fn current(&self) -> Items<T> {
        self.sender.borrow().clone()
    }

    /// Apply `transition` to the latest snapshot, publish and return the
    /// result.
    ///
    /// Writers are serialized: `transition` runs while the store is locked,
    /// so it must not call back into the store (`current`, `update`, ...).
    pub fn update<F>(&self, transition: F) -> Items<T>
    where
        F: FnOnce(&Items<T>) -> Items<T>,
    {
        let mut published = None;
        self.sender.send_modify(|items| {
            let next = transition(items);
            *items = next.clone();
            published = Some(next);
        });
        let items = published.unwrap_or_else(|| self.current());
        debug!(
            "Published snapshot: {} of {} items, page {}/{}, {} selected",
            items.page_info().total(),
            items.len(),
            items.page_info().page() + 1,
            items.page_info().pages(),
            items.selected_count()
        );
        items
    }

    /// Like [`ItemsStore::update`] for fallible transitions. On error nothing
    /// is published and the current snapshot is kept. The same locking rule
    /// applies to `transition`.
    ///
    /// # Errors
    /// Returns the error of `transition`.
    pub fn try_update<F>(&self, transition: F) -> Result<Items<T>, ItemsError>
    where
        F: FnOnce(&Items<T>) -> Result<Items<T>, ItemsError>,
    {
        let mut outcome = None;
        self.sender.send_if_modified(|items| match transition(items) {
            Ok(next) => {
                *items = next.clone();
                outcome = Some(Ok(next));
                true
            }
            Err(e) => {
                debug!("Transition rejected: {}", e);
                outcome = Some(Err(e));
                false
            }
        });
        outcome.unwrap_or_else(|| Ok(self.current()))
    }

    /// Receiver notified on every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Items<T>> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<T> std::fmt::Debug for ItemsStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemsStore")
            .field("current", &*self.sender.borrow())
            .field("subscribers", &self.sender.receiver_count())
            .finish()
    }
}
