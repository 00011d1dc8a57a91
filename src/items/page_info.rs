//! Pagination window over a collection of known size.

use super::ItemsError;
use crate::constants::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Immutable pagination state: page size, zero-based current page and total
/// number of items.
///
/// Every transition returns a new value with `page` clamped into
/// `0..=pages() - 1`. There is always at least one page, so an empty
/// collection still reports "page 1 of 1".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPageInfo")]
pub struct PageInfo {
    page_size: usize,
    page: usize,
    total: usize,
}

/// Unchecked wire form, validated through [`PageInfo::new`].
#[derive(Deserialize)]
struct RawPageInfo {
    page_size: usize,
    #[serde(default)]
    page: usize,
    #[serde(default)]
    total: usize,
}

impl TryFrom<RawPageInfo> for PageInfo {
    type Error = ItemsError;

    fn try_from(raw: RawPageInfo) -> Result<Self, Self::Error> {
        Self::new(raw.page_size, raw.page, raw.total)
    }
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page: 0,
            total: 0,
        }
    }
}

impl PageInfo {
    /// Create a new page info. `page` is clamped to the last page.
    ///
    /// # Errors
    /// Returns [`ItemsError::InvalidArgument`] if `page_size` is zero.
    pub fn new(page_size: usize, page: usize, total: usize) -> Result<Self, ItemsError> {
        if page_size == 0 {
            return Err(ItemsError::InvalidArgument("page size must be greater than 0".to_string()));
        }
        Ok(Self::clamped(page_size, page, total))
    }

    /// Create a page info from signed values, e.g. numbers coming straight
    /// from a page size selector or a "go to page" input.
    ///
    /// # Errors
    /// Returns [`ItemsError::InvalidArgument`] if `page_size <= 0`, `page < 0`
    /// or `total < 0`.
    pub fn from_signed(page_size: i64, page: i64, total: i64) -> Result<Self, ItemsError> {
        let page_size = usize::try_from(page_size)
            .ok()
            .filter(|size| *size > 0)
            .ok_or_else(|| ItemsError::InvalidArgument(format!("page size must be greater than 0, got {}", page_size)))?;
        let page = usize::try_from(page)
            .map_err(|_| ItemsError::InvalidArgument(format!("page must not be negative, got {}", page)))?;
        let total = usize::try_from(total)
            .map_err(|_| ItemsError::InvalidArgument(format!("total must not be negative, got {}", total)))?;
        Self::new(page_size, page, total)
    }

    fn clamped(page_size: usize, page: usize, total: usize) -> Self {
        let pages = Self::page_count(page_size, total);
        Self {
            page_size,
            page: page.min(pages - 1),
            total,
        }
    }

    fn page_count(page_size: usize, total: usize) -> usize {
        total.div_ceil(page_size).max(1)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Zero-based current page.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of pages, never less than 1.
    pub fn pages(&self) -> usize {
        Self::page_count(self.page_size, self.total)
    }

    /// Inclusive, 1-based range of the items on the current page.
    ///
    /// For an empty collection this is `1..=0`, which is empty. Callers
    /// slicing with it must check [`RangeInclusive::is_empty`] first.
    pub fn range(&self) -> RangeInclusive<usize> {
        let from = if self.total == 0 { 1 } else { self.page * self.page_size + 1 };
        let to = self.total.min((from - 1).saturating_add(self.page_size));
        from..=to
    }

    pub fn first_page(&self) -> bool {
        self.page == 0
    }

    pub fn last_page(&self) -> bool {
        self.page == self.pages() - 1
    }

    #[must_use]
    pub fn goto_first_page(&self) -> Self {
        self.goto_page(0)
    }

    #[must_use]
    pub fn goto_previous_page(&self) -> Self {
        self.goto_page(self.page.saturating_sub(1))
    }

    #[must_use]
    pub fn goto_next_page(&self) -> Self {
        self.goto_page(self.page.saturating_add(1))
    }

    #[must_use]
    pub fn goto_last_page(&self) -> Self {
        self.goto_page(self.pages() - 1)
    }

    /// Go to page `page`, clamping out-of-range requests instead of failing.
    #[must_use]
    pub fn goto_page(&self, page: usize) -> Self {
        Self::clamped(self.page_size, page, self.total)
    }

    /// Change the page size, keeping the current page if it still exists.
    ///
    /// # Errors
    /// Returns [`ItemsError::InvalidArgument`] if `page_size` is zero.
    pub fn with_page_size(&self, page_size: usize) -> Result<Self, ItemsError> {
        Self::new(page_size, self.page, self.total)
    }

    /// Change the total, keeping the current page if it still exists.
    #[must_use]
    pub fn with_total(&self, total: usize) -> Self {
        Self::clamped(self.page_size, self.page, total)
    }
}

impl fmt::Display for PageInfo {
    /// Paginator toggle text, e.g. `11-20 of 42`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let range = self.range();
        if range.is_empty() {
            write!(f, "0-0 of 0")
        } else {
            write!(f, "{}-{} of {}", range.start(), range.end(), self.total)
        }
    }
}
