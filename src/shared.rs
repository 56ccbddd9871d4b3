//! Types shared across API resources: pagination and the plain message
//! response envelope.

use serde::Serialize;

/// Default page size for list endpoints.
pub const DEFAULT_PAGE_SIZE: i64 = 50;

/// Pagination block returned by every list endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub has_more: bool,
}

impl Pagination {
    pub fn new(total: i64, limit: i64, offset: i64) -> Self {
        Self {
            total,
            limit,
            offset,
            has_more: total > offset + limit,
        }
    }
}

/// Resolve optional limit/offset query parameters to concrete values.
/// Negative values are clamped to zero rather than rejected.
pub fn page_params(limit: Option<i64>, offset: Option<i64>) -> (i64, i64) {
    let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).max(0);
    let offset = offset.unwrap_or(0).max(0);
    (limit, offset)
}

/// Response body for endpoints that only acknowledge an action.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
