/**
 * Error Conversion
 *
 * Converts `ApiError` into HTTP responses. Every error body has the shape
 * `{"error": "<message>"}`. Internal failures are logged here and replaced
 * with a generic message so details never leak to clients.
 */

use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if self.is_internal() {
            tracing::error!("request failed: {self}");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_response() {
        let response = ApiError::not_found("Contact not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_error_response_is_generic() {
        let response = ApiError::internal("pool exhausted").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
