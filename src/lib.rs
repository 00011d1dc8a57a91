//! pagelist - Paged, filtered, sorted and selectable item collections
//!
//! This library provides the state models behind data-driven UI components
//! such as card views, data lists, data tables, tabs and accordions. All
//! models are immutable values: every transition returns a new value, which a
//! store publishes to whatever renders it.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`items`] - `Items<T>` collections with `PageInfo`, `SortInfo` and filters
//! * [`entries`] - Ordered entries with a single active entry
//! * [`expanded`] - Identifier-keyed expand/collapse state
//! * [`store`] - Single-writer store publishing `Items<T>` snapshots
//! * [`config`] - Configuration management
//! * [`logger`] - Logging setup and in-memory log buffer

/// Configuration module for managing settings
pub mod config;

/// Constants and default values
pub mod constants;

/// Ordered entries with a single active entry
pub mod entries;

/// Expand/collapse state for accordions and expandable rows
pub mod expanded;

/// Paged, filtered, sorted and selectable collections
pub mod items;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Snapshot store for item collections
pub mod store;

pub use entries::Entries;
pub use expanded::ExpandedStore;
pub use items::{ItemFilter, Items, ItemsError, PageInfo, SortInfo};
pub use store::ItemsStore;
