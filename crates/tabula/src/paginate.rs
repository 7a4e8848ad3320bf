//! Pagination: slicing an ordered sequence into fixed-size pages.
//!
//! Pages are 1-indexed and there is always at least one page, even over an
//! empty sequence — an empty result renders as an empty page 1, never as
//! "page 0 of 0". Out-of-range page requests clamp instead of erroring,
//! since they are reachable through ordinary UI clicks while the underlying
//! data is being refreshed.
//!
//! # Example
//!
//! ```rust
//! use tabula::paginate::{PageState, slice_bounds, total_pages};
//!
//! let page = PageState::new(10).unwrap();
//! assert_eq!(total_pages(23, page.page_size()), 3);
//!
//! let (start, end) = slice_bounds(23, 3, page.page_size());
//! assert_eq!(end - start, 3); // last page holds the remainder
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewError};

/// Page size used when the configuration does not override it.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Returns the number of pages needed for `count` items, minimum 1.
#[must_use]
pub const fn total_pages(count: usize, page_size: usize) -> usize {
    if count == 0 {
        return 1;
    }
    count.div_ceil(page_size)
}

/// Returns the `[start, end)` bounds of the given 1-indexed page.
///
/// The page is clamped into range first, so the bounds are always valid for
/// slicing a collection of `count` items.
#[must_use]
pub fn slice_bounds(count: usize, page: usize, page_size: usize) -> (usize, usize) {
    let page = page.clamp(1, total_pages(count, page_size));
    let start = (page - 1) * page_size;
    let start = start.min(count);
    let end = (start + page_size).min(count);
    (start, end)
}

/// Current page and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    page_size: usize,
    current_page: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 1,
        }
    }
}

impl PageState {
    /// Creates page state on page 1 with the given page size.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidPageSize`] if `page_size` is zero.
    pub fn new(page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(ViewError::InvalidPageSize(page_size));
        }
        Ok(Self {
            page_size,
            current_page: 1,
        })
    }

    /// Returns the page size.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the current page (1-indexed).
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Moves to `page`, clamped to `[1, total_pages]` for `total_items`.
    pub fn set_page(&mut self, page: usize, total_items: usize) {
        self.current_page = page.clamp(1, total_pages(total_items, self.page_size));
    }

    /// Changes the page size and re-clamps the current page.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidPageSize`] if `page_size` is zero.
    pub fn set_page_size(&mut self, page_size: usize, total_items: usize) -> Result<()> {
        if page_size == 0 {
            return Err(ViewError::InvalidPageSize(page_size));
        }
        self.page_size = page_size;
        self.clamp(total_items);
        Ok(())
    }

    /// Re-clamps the current page after the item count changed.
    pub fn clamp(&mut self, total_items: usize) {
        self.current_page = self
            .current_page
            .clamp(1, total_pages(total_items, self.page_size));
    }

    /// Returns the page that would be shown for `total_items`, without
    /// mutating the stored request.
    #[must_use]
    pub fn clamped_page(&self, total_items: usize) -> usize {
        self.current_page
            .clamp(1, total_pages(total_items, self.page_size))
    }
}
