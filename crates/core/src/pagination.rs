//! Page-based pagination over ordered result sets.
//!
//! [`PageParams`] is deserialized from `?pageNumber=&pageSize=` query strings
//! and validated while deserializing, so a page size is always positive.
//! [`PagedList`] carries one page of items together with the navigation
//! metadata that list endpoints expose in the `X-Pagination` response header.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Page number used when the client does not send `pageNumber`.
pub const DEFAULT_PAGE_NUMBER: i64 = 1;
/// Page size used when the client does not send `pageSize`.
pub const DEFAULT_PAGE_SIZE: i64 = 10;
/// Upper bound for `pageSize`; larger requests are clamped to this value.
pub const MAX_PAGE_SIZE: i64 = 50;

fn default_page_number() -> i64 {
    DEFAULT_PAGE_NUMBER
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

/// Requested page (1-based) and page size.
///
/// Always valid: every constructor, including deserialization, rejects
/// non-positive values and clamps the size to [`MAX_PAGE_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawPageParams")]
pub struct PageParams {
    page_number: i64,
    page_size: i64,
}

/// Query-string shape of [`PageParams`] before validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPageParams {
    #[serde(default = "default_page_number")]
    page_number: i64,
    #[serde(default = "default_page_size")]
    page_size: i64,
}

impl TryFrom<RawPageParams> for PageParams {
    type Error = CoreError;

    fn try_from(raw: RawPageParams) -> Result<Self, Self::Error> {
        Self::new(raw.page_number, raw.page_size)
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageParams {
    /// Reject non-positive page numbers and sizes, clamp the size to
    /// [`MAX_PAGE_SIZE`].
    pub fn new(page_number: i64, page_size: i64) -> Result<Self, CoreError> {
        if page_size <= 0 {
            return Err(CoreError::Validation(format!(
                "pageSize must be greater than zero, got {page_size}"
            )));
        }
        if page_number <= 0 {
            return Err(CoreError::Validation(format!(
                "pageNumber must be greater than zero, got {page_number}"
            )));
        }
        Ok(Self {
            page_number,
            page_size: page_size.min(MAX_PAGE_SIZE),
        })
    }

    pub fn page_number(&self) -> i64 {
        self.page_number
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Number of items to skip before this page.
    pub fn offset(&self) -> i64 {
        (self.page_number - 1).saturating_mul(self.page_size)
    }

    /// Maximum number of items on this page.
    pub fn limit(&self) -> i64 {
        self.page_size
    }
}

/// Navigation metadata for a page, serialized into the `X-Pagination` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaginationMetadata {
    pub total_count: i64,
    pub page_size: i64,
    pub current_page: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_previous: bool,
}

/// One page of an ordered result set.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub total_count: i64,
    pub page_size: i64,
    pub current_page: i64,
    pub total_pages: i64,
}

impl<T> PagedList<T> {
    /// Wrap items that were already cut to the requested page by the store
    /// (e.g. via `LIMIT`/`OFFSET`), given the total count of the full set.
    pub fn from_parts(items: Vec<T>, total_count: i64, params: &PageParams) -> Self {
        let total_pages = if total_count <= 0 {
            0
        } else {
            (total_count + params.page_size - 1) / params.page_size
        };

        Self {
            items,
            total_count: total_count.max(0),
            page_size: params.page_size,
            current_page: params.page_number,
            total_pages,
        }
    }

    /// Cut an already ordered sequence down to the requested page.
    pub fn paginate(all: Vec<T>, params: &PageParams) -> Self {
        let total_count = all.len() as i64;
        let offset = usize::try_from(params.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(params.limit()).unwrap_or(usize::MAX);

        let items = all.into_iter().skip(offset).take(limit).collect();
        Self::from_parts(items, total_count, params)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn metadata(&self) -> PaginationMetadata {
        PaginationMetadata {
            total_count: self.total_count,
            page_size: self.page_size,
            current_page: self.current_page,
            total_pages: self.total_pages,
            has_next: self.has_next(),
            has_previous: self.has_previous(),
        }
    }

    /// Convert every item while keeping the page metadata.
    pub fn map<U, F>(self, f: F) -> PagedList<U>
    where
        F: FnMut(T) -> U,
    {
        PagedList {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_size: self.page_size,
            current_page: self.current_page,
            total_pages: self.total_pages,
        }
    }
}
