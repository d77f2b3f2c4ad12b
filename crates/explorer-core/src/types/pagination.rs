//! Pagination types for search endpoints.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// Default page size.
pub const DEFAULT_LIMIT: u64 = 50;
/// Default page number.
pub const DEFAULT_PAGE: u64 = 1;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
}

impl PageRequest {
    /// Create a new page request. Both `page` and `limit` must be positive.
    pub fn new(page: u64, limit: u64) -> AppResult<Self> {
        if page == 0 {
            return Err(AppError::validation("page must be greater than 0"));
        }
        if limit == 0 {
            return Err(AppError::validation("limit must be greater than 0"));
        }
        Ok(Self { page, limit })
    }

    /// Number of items to skip: `(page - 1) * limit`.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// Return the maximum number of items on this page.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// `LIMIT` bind value, saturating at `i64::MAX`.
    pub fn sql_limit(&self) -> i64 {
        i64::try_from(self.limit).unwrap_or(i64::MAX)
    }

    /// `OFFSET` bind value, saturating at `i64::MAX`. Never negative.
    pub fn sql_offset(&self) -> i64 {
        i64::try_from(self.offset()).unwrap_or(i64::MAX)
    }

    /// Slice a fully materialized, already ordered result set.
    ///
    /// Pages past the end yield an empty vector.
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        let offset = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(self.limit).unwrap_or(usize::MAX);
        items.into_iter().skip(offset).take(limit).collect()
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// One page of results plus the total number of matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total: u64,
}

impl<T> PageResponse<T> {
    /// Create a new page.
    pub fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }

    /// Create an empty page.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

/// Pagination block reported alongside search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page number (1-based).
    pub page: u64,
    /// Items per page.
    pub limit: u64,
    /// Total number of matches.
    pub total: u64,
    /// `ceil(total / limit)`; zero when nothing matched.
    pub total_pages: u64,
}

impl Pagination {
    /// Build the pagination block for `total` matches.
    pub fn new(request: &PageRequest, total: u64) -> Self {
        Self {
            page: request.page,
            limit: request.limit,
            total,
            total_pages: total.div_ceil(request.limit.max(1)),
        }
    }
}
