//! Pagination types for list queries.

use serde::{Deserialize, Serialize};

/// Default page size for list queries.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// An immutable snapshot of one page of results plus pagination metadata.
///
/// `total_items` counts every row matching the filter set before the
/// pagination window is applied, so it is independent of `page_index`
/// and `page_size`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedList<T> {
    items: Vec<T>,
    page_index: u32,
    page_size: u32,
    total_items: u64,
}

impl<T> PagedList<T> {
    /// Create a new page snapshot.
    pub fn new(items: Vec<T>, page_index: u32, page_size: u32, total_items: u64) -> Self {
        Self {
            items,
            page_index,
            page_size,
            total_items,
        }
    }

    /// The entities on this page, in query order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the page and return the items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Zero-based page number that was requested.
    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    /// Requested page size.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Count of rows matching the filter set before pagination.
    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Whether a previous page exists.
    pub fn has_previous_page(&self) -> bool {
        self.page_index > 0
    }

    /// Whether more filtered rows exist past this page.
    pub fn has_next_page(&self) -> bool {
        (self.page_index as u64 + 1) * (self.page_size as u64) < self.total_items
    }
}
