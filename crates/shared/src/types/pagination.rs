//! Pagination types for ledger and registry queries.

use serde::{Deserialize, Serialize};

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-indexed).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Number of items per page.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    20
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl PageRequest {
    /// Returns a copy with `per_page` capped at `max` (and raised to 1 if 0).
    #[must_use]
    pub fn clamped(&self, max: u32) -> Self {
        Self {
            page: self.page.max(1),
            per_page: self.per_page.clamp(1, max.max(1)),
        }
    }

    /// Calculates the offset into the full result set.
    #[must_use]
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize) * (self.per_page as usize)
    }

    /// Returns the maximum number of items in the page.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.per_page as usize
    }
}

/// Response wrapper for paginated data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items in the current page.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub meta: PageMeta,
}

/// Pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMeta {
    /// Current page number.
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
    /// Total number of items across all pages.
    pub total: u64,
    /// Total number of pages.
    pub total_pages: u32,
}

impl<T> PageResponse<T> {
    /// Creates a new paginated response.
    #[must_use]
    pub fn new(data: Vec<T>, page: u32, per_page: u32, total: u64) -> Self {
        let total_pages = if total == 0 {
            1
        } else {
            u32::try_from(total.div_ceil(u64::from(per_page.max(1)))).unwrap_or(u32::MAX)
        };

        Self {
            data,
            meta: PageMeta {
                page,
                per_page,
                total,
                total_pages,
            },
        }
    }
}
