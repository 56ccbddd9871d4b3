/**
 * Authentication Middleware
 *
 * Protects resource routes. The middleware:
 * 1. Extracts the bearer token from the Authorization header (401 if absent)
 * 2. Verifies signature and expiry (403 if invalid)
 * 3. Re-checks that the referenced user still exists (401 if deleted)
 * 4. Attaches the identity to request extensions for handlers
 *
 * Owner-scoping every query by the attached user id is the only
 * authorization mechanism; there are no roles.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::sessions::verify_token;
use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Identity resolved from a verified token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    /// Email recorded in the token at issuance time.
    pub email: String,
}

pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::unauthorized("Access token required"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::unauthorized("Access token required"))?;

    let claims = verify_token(token, &state.config.jwt_secret).map_err(|e| {
        tracing::warn!("token verification failed: {e}");
        ApiError::forbidden("Invalid token")
    })?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| ApiError::forbidden("Invalid token"))?;

    // The token can outlive the account; check the row is still there.
    if get_user_by_id(&state.pool, user_id).await?.is_none() {
        tracing::warn!(%user_id, "token references a deleted user");
        return Err(ApiError::unauthorized("User not found"));
    }

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Extractor handing the authenticated identity to handlers.
///
/// Only valid on routes behind `auth_middleware`; elsewhere the extension
/// is absent and extraction fails with 401.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| ApiError::unauthorized("Access token required"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request as HttpRequest;

    #[tokio::test]
    async fn test_extractor_reads_extension() {
        let user = AuthenticatedUser {
            user_id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
        };

        let request = HttpRequest::builder()
            .uri("http://localhost/api/contacts")
            .extension(user.clone())
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let AuthUser(extracted) = AuthUser::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(extracted.user_id, user.user_id);
        assert_eq!(extracted.email, "test@example.com");
    }

    #[tokio::test]
    async fn test_extractor_fails_without_extension() {
        let request = HttpRequest::builder()
            .uri("http://localhost/api/contacts")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let result = AuthUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }
}
