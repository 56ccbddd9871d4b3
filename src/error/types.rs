/**
 * API Error Types
 *
 * This module defines the error taxonomy used by every HTTP handler.
 * Each variant maps to a fixed status code, and all error responses share
 * the `{"error": "..."}` body shape.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors returned by API handlers.
///
/// The first five variants carry client-facing messages. The remaining
/// variants wrap infrastructure failures; their details are logged and
/// replaced with a generic message before leaving the server.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input.
    #[error("{0}")]
    Validation(String),

    /// A unique constraint (account email, contact email per owner,
    /// message id) would be violated.
    #[error("{0}")]
    Duplicate(String),

    /// Missing credentials, or credentials that reference a user who no
    /// longer exists.
    #[error("{0}")]
    Unauthorized(String),

    /// A token that is present but invalid, malformed, or expired.
    #[error("{0}")]
    Forbidden(String),

    /// Record absent, or present but owned by a different user.
    #[error("{0}")]
    NotFound(String),

    /// Database failure.
    #[error("database error: {0}")]
    Database(sqlx::Error),

    /// Password hashing or verification failure.
    #[error("bcrypt error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing failure. Verification failures are mapped to
    /// `Forbidden` at the call site instead.
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Anything else that should surface as a 500.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn duplicate(message: impl Into<String>) -> Self {
        Self::Duplicate(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Status code for this error.
    ///
    /// Duplicates return 400 rather than 409, matching the public API
    /// contract for registration and contact creation.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Duplicate(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Hash(_) | Self::Token(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Whether this error hides its detail from the response body.
    pub fn is_internal(&self) -> bool {
        self.status_code() == StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl From<sqlx::Error> for ApiError {
    /// Unique-constraint violations become `Duplicate` so that two racing
    /// creates produce a 400 for the loser instead of a 500.
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some("23505") {
                return Self::Duplicate("Record already exists".to_string());
            }
        }
        Self::Database(err)
    }
}
