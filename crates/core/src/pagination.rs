//! Page-number pagination shared by every list endpoint.
//!
//! Callers speak 1-based page numbers; storage speaks offsets; responses
//! report a zero-based page index.

use serde::Serialize;

use crate::error::{CoreError, FieldError};

/// Page used when the caller omits `page`.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the caller omits `limit`.
pub const DEFAULT_LIMIT: i64 = 20;

/// Largest accepted page size.
pub const MAX_LIMIT: i64 = 100;

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    limit: i64,
}

impl PageRequest {
    /// Build a page request, rejecting `page < 1` and `limit` outside `1..=MAX_LIMIT`.
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Result<Self, CoreError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        let mut details = Vec::new();
        if page < 1 {
            details.push(FieldError::new("page", "Page must be 1 or greater"));
        }
        if limit < 1 {
            details.push(FieldError::new("limit", "Limit must be at least 1"));
        } else if limit > MAX_LIMIT {
            details.push(FieldError::new("limit", "Limit must not exceed 100"));
        }

        if details.is_empty() {
            Ok(Self { page, limit })
        } else {
            Err(CoreError::Validation {
                message: "Validation failed".to_string(),
                details,
            })
        }
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Zero-based page index.
    pub fn page_index(&self) -> i64 {
        self.page - 1
    }

    /// Row offset of the first item on this page.
    pub fn offset(&self) -> i64 {
        self.page_index().saturating_mul(self.limit)
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

/// Pagination metadata returned alongside list items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total_items: i64,
    pub total_pages: i64,
    pub page_index: i64,
    pub limit: i64,
}

impl PageMeta {
    pub fn new(request: PageRequest, total_items: i64) -> Self {
        let total_items = total_items.max(0);
        let total_pages = if total_items == 0 {
            0
        } else {
            (total_items + request.limit - 1) / request.limit
        };
        Self {
            total_items,
            total_pages,
            page_index: request.page_index(),
            limit: request.limit,
        }
    }
}

/// One page of items plus its metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_items: i64) -> Self {
        Self {
            items,
            meta: PageMeta::new(request, total_items),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }

    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Page<U>, E> {
        Ok(Page {
            items: self.items.into_iter().map(f).collect::<Result<_, _>>()?,
            meta: self.meta,
        })
    }
}
