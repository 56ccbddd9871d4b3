/**
 * Login Handler
 *
 * POST /api/auth/login
 *
 * Unknown email and wrong password return the same 400 "Invalid
 * credentials" so the endpoint cannot be used to enumerate accounts.
 * A successful login stamps last_login before issuing the token.
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;

use crate::auth::handlers::types::{AuthResponse, LoginRequest, UserResponse};
use crate::auth::sessions::create_token;
use crate::auth::users::{get_user_by_email, touch_last_login};
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::validation::normalize_email;

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (Some(email), Some(password)) = (request.email, request.password) else {
        return Err(ApiError::validation("Email and password are required"));
    };

    let email = normalize_email(&email);

    let Some(user) = get_user_by_email(&state.pool, &email).await? else {
        tracing::warn!(%email, "login for unknown email");
        return Err(ApiError::validation("Invalid credentials"));
    };

    let stored_hash = user.password_hash.clone();
    let valid = tokio::task::spawn_blocking(move || verify(password, &stored_hash))
        .await
        .map_err(|e| ApiError::internal(format!("verify task failed: {e}")))??;

    if !valid {
        tracing::warn!(user_id = %user.id, "login with wrong password");
        return Err(ApiError::validation("Invalid credentials"));
    }

    let user = touch_last_login(&state.pool, user.id)
        .await?
        .ok_or_else(|| ApiError::validation("Invalid credentials"))?;

    let token = create_token(user.id, &user.email, &state.config.jwt_secret)?;

    tracing::info!(user_id = %user.id, "user logged in");

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        token,
        user: UserResponse::from(&user),
    }))
}
