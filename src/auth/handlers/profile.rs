/**
 * Profile Handlers
 *
 * GET /api/auth/profile and PUT /api/auth/profile, both behind the auth
 * middleware. The update is partial: a name shorter than two characters
 * is skipped rather than rejected, and company is replaced whenever the
 * field is present.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{ProfileResponse, UpdateProfileRequest, UserResponse};
use crate::auth::users::{get_user_by_id, update_profile};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;
use crate::validation::is_valid_name;

/// Return the authenticated user's public profile.
///
/// 404 covers the narrow window where the account was deleted after the
/// middleware check.
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = get_user_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(ProfileResponse {
        message: None,
        user: UserResponse::from(&user),
    }))
}

/// Apply a partial profile update and return the new profile.
pub async fn put_profile(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let current = get_user_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    let name = match &request.name {
        Some(name) if is_valid_name(name) => name.trim().to_string(),
        _ => current.name.clone(),
    };
    let company = match &request.company {
        Some(company) => company.trim().to_string(),
        None => current.company.clone(),
    };

    let user = update_profile(&state.pool, auth.user_id, &name, &company)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    tracing::info!(user_id = %user.id, "profile updated");

    Ok(Json(ProfileResponse {
        message: Some("Profile updated successfully".to_string()),
        user: UserResponse::from(&user),
    }))
}
