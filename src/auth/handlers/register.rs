/**
 * Registration Handler
 *
 * POST /api/auth/register
 *
 * 1. Validate email format, password length, name length
 * 2. Reject emails that are already registered
 * 3. Hash the password with bcrypt (on a blocking thread)
 * 4. Insert the user and issue a bearer token
 *
 * The duplicate check is a pre-check; the unique constraint on the email
 * column catches the race between two concurrent registrations, and the
 * resulting database error is translated to the same 400.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};

use crate::auth::handlers::types::{AuthResponse, RegisterRequest, UserResponse};
use crate::auth::sessions::create_token;
use crate::auth::users::{create_user, get_user_by_email};
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::validation::{is_valid_email, is_valid_name, normalize_email, MIN_PASSWORD_LEN};

/// Register a new account and log it in.
///
/// Returns `201 Created` with `{message, token, user}`, or 400 for invalid
/// input and duplicate emails.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let (Some(email), Some(password), Some(name)) =
        (request.email, request.password, request.name)
    else {
        return Err(ApiError::validation(
            "Email, password, and name are required",
        ));
    };

    let email = normalize_email(&email);
    if !is_valid_email(&email) {
        return Err(ApiError::validation("Invalid email format"));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ApiError::validation(
            "Password must be at least 6 characters long",
        ));
    }
    if !is_valid_name(&name) {
        return Err(ApiError::validation(
            "Name must be at least 2 characters long",
        ));
    }
    let name = name.trim().to_string();
    let company = request.company.unwrap_or_default().trim().to_string();

    if get_user_by_email(&state.pool, &email).await?.is_some() {
        tracing::warn!(%email, "registration for existing email");
        return Err(ApiError::duplicate("User already exists"));
    }

    // bcrypt is CPU-bound; keep it off the async workers.
    let password_hash = tokio::task::spawn_blocking(move || hash(password, DEFAULT_COST))
        .await
        .map_err(|e| ApiError::internal(format!("hash task failed: {e}")))??;

    let user = create_user(&state.pool, &email, &name, &company, &password_hash).await?;

    let token = create_token(user.id, &user.email, &state.config.jwt_secret)?;

    tracing::info!(user_id = %user.id, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User created successfully".to_string(),
            token,
            user: UserResponse::from(&user),
        }),
    ))
}
