//! Constants used throughout the crate
//!
//! This module centralizes default values, limits and user-facing messages.

// Paging defaults
/// Page size of a freshly created collection
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Page sizes offered by a paginator's per-page selector
pub const DEFAULT_PAGE_SIZES: [usize; 4] = [10, 20, 50, 100];
/// Largest page size accepted from configuration
pub const MAX_PAGE_SIZE: usize = 1000;

// Config discovery
pub const CONFIG_FILE_NAME: &str = "pagelist.toml";
pub const CONFIG_DIR_NAME: &str = "pagelist";
pub const LOG_FILE_NAME: &str = "pagelist.log";

// Log levels accepted in the [logging] section
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Number of log lines kept in memory for debug display
pub const LOG_BUFFER_CAPACITY: usize = 500;

// Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const ERROR_USAGE: &str = "Usage: pagelist <file.json> [page] | pagelist --init [config.toml]";
pub const ERROR_NOT_AN_ARRAY: &str = "❌ Input must be a JSON array";
pub const EMPTY_PAGE: &str = "(no items)";
