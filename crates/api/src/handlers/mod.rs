pub mod categories;
pub mod diagnostics;
pub mod products;

use axum::http::{HeaderName, HeaderValue};
use catalog_core::pagination::PagedList;

use crate::error::{AppError, AppResult};

/// Response header carrying the page metadata of list endpoints.
pub const PAGINATION_HEADER: HeaderName = HeaderName::from_static("x-pagination");

/// Serialize the metadata of `page` for the `X-Pagination` header.
pub(crate) fn pagination_header<T>(page: &PagedList<T>) -> AppResult<[(HeaderName, HeaderValue); 1]> {
    let json = serde_json::to_string(&page.metadata())
        .map_err(|e| AppError::InternalError(format!("Failed to encode pagination: {e}")))?;
    let value = HeaderValue::from_str(&json)
        .map_err(|e| AppError::InternalError(format!("Invalid pagination header: {e}")))?;
    Ok([(PAGINATION_HEADER, value)])
}
