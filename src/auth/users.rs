/**
 * User Model and Database Operations
 *
 * Row type and queries for the users table. Emails are stored trimmed and
 * lowercased; callers normalize before reaching this module.
 */

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

const USER_COLUMNS: &str = "id, email, name, password_hash, company, email_provider, \
     is_email_synced, last_email_sync, last_login, created_at, updated_at";

/// A user row. The password hash never leaves the server; response types
/// are built from the public fields only.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub company: String,
    pub email_provider: String,
    pub is_email_synced: bool,
    pub last_email_sync: Option<DateTime<Utc>>,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert a new user. The unique constraint on email backs up the
/// caller's duplicate pre-check.
pub async fn create_user(
    pool: &PgPool,
    email: &str,
    name: &str,
    company: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO users (id, email, name, password_hash, company, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $6)
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(email)
    .bind(name)
    .bind(password_hash)
    .bind(company)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1"))
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn get_user_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Stamp the last-login time, returning the updated row.
pub async fn touch_last_login(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, User>(&format!(
        r#"
        UPDATE users
        SET last_login = $2, updated_at = $2
        WHERE id = $1
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(now)
    .fetch_optional(pool)
    .await
}

/// Apply a partial profile update, returning the updated row.
pub async fn update_profile(
    pool: &PgPool,
    id: Uuid,
    name: &str,
    company: &str,
) -> Result<Option<User>, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, User>(&format!(
        r#"
        UPDATE users
        SET name = $2, company = $3, updated_at = $4
        WHERE id = $1
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(name)
    .bind(company)
    .bind(now)
    .fetch_optional(pool)
    .await
}

/// Record a completed inbox sync: flag, timestamp, and provider name.
pub async fn mark_synced(
    pool: &PgPool,
    id: Uuid,
    provider: &str,
    synced_at: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE users
        SET is_email_synced = TRUE, last_email_sync = $2, email_provider = $3, updated_at = $2
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(synced_at)
    .bind(provider)
    .execute(pool)
    .await?;

    Ok(())
}
