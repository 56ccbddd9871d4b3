/**
 * Authentication Handler Types
 *
 * Request and response bodies for the auth endpoints. Request fields are
 * all optional so that missing fields produce a 400 with a useful message
 * instead of a deserialization rejection; handlers validate at the
 * boundary before any store access.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Registration request.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub company: Option<String>,
}

/// Login request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Partial profile update. Absent fields are left untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub company: Option<String>,
}

/// Public view of a user. Never carries the password hash.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub company: String,
    pub is_email_synced: bool,
    pub last_email_sync: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            company: user.company.clone(),
            is_email_synced: user.is_email_synced,
            last_email_sync: user.last_email_sync,
            created_at: user.created_at,
            last_login: user.last_login,
        }
    }
}

/// Body returned by register and login: a bearer token plus the profile.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: UserResponse,
}

/// Body returned by the profile endpoints.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub user: UserResponse,
}
