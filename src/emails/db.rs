//! Database operations for inbox messages.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::emails::types::{Email, EmailAddress, NewEmail};

const EMAIL_COLUMNS: &str = "id, user_id, message_id, subject, sender_name, sender_email, \
     recipients, body, html_body, is_read, is_important, labels, thread_id, received_at, \
     created_at, updated_at";

fn row_to_email(row: &PgRow) -> Email {
    Email {
        id: row.get("id"),
        user_id: row.get("user_id"),
        message_id: row.get("message_id"),
        subject: row.get("subject"),
        sender: EmailAddress {
            name: row.get("sender_name"),
            email: row.get("sender_email"),
        },
        recipients: row.get::<Json<Vec<EmailAddress>>, _>("recipients").0,
        body: row.get("body"),
        html_body: row.get("html_body"),
        is_read: row.get("is_read"),
        is_important: row.get("is_important"),
        labels: row.get("labels"),
        thread_id: row.get("thread_id"),
        received_at: row.get("received_at"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// List a user's messages, newest first, with the total for pagination.
/// The unread/important filters are conjunctive when both are set.
pub async fn list_emails(
    pool: &PgPool,
    user_id: Uuid,
    unread_only: bool,
    important_only: bool,
    limit: i64,
    offset: i64,
) -> Result<(Vec<Email>, i64), sqlx::Error> {
    let rows = sqlx::query(&format!(
        r#"
        SELECT {EMAIL_COLUMNS}
        FROM emails
        WHERE user_id = $1
          AND (NOT $2 OR is_read = FALSE)
          AND (NOT $3 OR is_important = TRUE)
        ORDER BY received_at DESC
        LIMIT $4 OFFSET $5
        "#
    ))
    .bind(user_id)
    .bind(unread_only)
    .bind(important_only)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    let total = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM emails
        WHERE user_id = $1
          AND (NOT $2 OR is_read = FALSE)
          AND (NOT $3 OR is_important = TRUE)
        "#,
    )
    .bind(user_id)
    .bind(unread_only)
    .bind(important_only)
    .fetch_one(pool)
    .await?;

    Ok((rows.iter().map(row_to_email).collect(), total))
}

pub async fn insert_email(
    pool: &PgPool,
    user_id: Uuid,
    new: &NewEmail,
) -> Result<Email, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let row = sqlx::query(&format!(
        r#"
        INSERT INTO emails
            (id, user_id, message_id, subject, sender_name, sender_email, recipients, body,
             is_read, is_important, labels, received_at, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $13)
        RETURNING {EMAIL_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(user_id)
    .bind(&new.message_id)
    .bind(&new.subject)
    .bind(&new.sender.name)
    .bind(&new.sender.email)
    .bind(Json(&new.recipients))
    .bind(&new.body)
    .bind(new.is_read)
    .bind(new.is_important)
    .bind(&new.labels)
    .bind(new.received_at)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(row_to_email(&row))
}

/// Remove a user's demo messages so a re-sync does not accumulate
/// duplicates. Returns the number of rows removed.
pub async fn purge_demo_emails(pool: &PgPool, user_id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM emails WHERE user_id = $1 AND message_id LIKE 'demo-%'")
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Owner-scoped read flag. Idempotent; returns false when nothing matched.
pub async fn mark_read(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE emails SET is_read = TRUE, updated_at = $3 WHERE id = $1 AND user_id = $2",
    )
    .bind(id)
    .bind(user_id)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Owner-scoped important flag, returning the new state.
pub async fn set_important(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
    important: bool,
) -> Result<Option<bool>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        UPDATE emails
        SET is_important = $3, updated_at = $4
        WHERE id = $1 AND user_id = $2
        RETURNING is_important
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(important)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.get("is_important")))
}

pub async fn count_for_user(pool: &PgPool, user_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM emails WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
}

pub async fn count_unread(pool: &PgPool, user_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM emails WHERE user_id = $1 AND is_read = FALSE",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
}

pub async fn count_important(pool: &PgPool, user_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM emails WHERE user_id = $1 AND is_important = TRUE",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// Count messages received in the half-open window `[start, end)`.
pub async fn count_received_between(
    pool: &PgPool,
    user_id: Uuid,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM emails WHERE user_id = $1 AND received_at >= $2 AND received_at < $3",
    )
    .bind(user_id)
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await
}
