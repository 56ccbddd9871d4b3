//! Database operations for contacts.
//!
//! All owner-scoped queries filter on `user_id`; sales leads are inserted
//! with a NULL owner and are not reachable through the scoped queries.

use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::contacts::types::{Contact, LeadSource, NewContact};

const CONTACT_COLUMNS: &str = "id, user_id, name, email, company, phone, notes, tags, is_lead, \
     lead_source, last_contacted_at, created_at, updated_at";

fn row_to_contact(row: &PgRow) -> Contact {
    Contact {
        id: row.get("id"),
        user_id: row.get("user_id"),
        name: row.get("name"),
        email: row.get("email"),
        company: row.get("company"),
        phone: row.get("phone"),
        notes: row.get("notes"),
        tags: row.get("tags"),
        is_lead: row.get("is_lead"),
        lead_source: LeadSource::from_str(row.get::<String, _>("lead_source").as_str())
            .unwrap_or_default(),
        last_contacted_at: row.get("last_contacted_at"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// List a user's contacts, newest first, with the total for pagination.
/// `search` is matched case-insensitively against name, email, and company.
pub async fn list_contacts(
    pool: &PgPool,
    user_id: Uuid,
    search: Option<&str>,
    limit: i64,
    offset: i64,
) -> Result<(Vec<Contact>, i64), sqlx::Error> {
    match search {
        Some(search) if !search.is_empty() => {
            let pattern = format!("%{search}%");

            let rows = sqlx::query(&format!(
                r#"
                SELECT {CONTACT_COLUMNS}
                FROM contacts
                WHERE user_id = $1
                  AND (name ILIKE $2 OR email ILIKE $2 OR company ILIKE $2)
                ORDER BY created_at DESC
                LIMIT $3 OFFSET $4
                "#
            ))
            .bind(user_id)
            .bind(&pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;

            let total = sqlx::query_scalar::<_, i64>(
                r#"
                SELECT COUNT(*)
                FROM contacts
                WHERE user_id = $1
                  AND (name ILIKE $2 OR email ILIKE $2 OR company ILIKE $2)
                "#,
            )
            .bind(user_id)
            .bind(&pattern)
            .fetch_one(pool)
            .await?;

            Ok((rows.iter().map(row_to_contact).collect(), total))
        }
        _ => {
            let rows = sqlx::query(&format!(
                r#"
                SELECT {CONTACT_COLUMNS}
                FROM contacts
                WHERE user_id = $1
                ORDER BY created_at DESC
                LIMIT $2 OFFSET $3
                "#
            ))
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;

            let total =
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contacts WHERE user_id = $1")
                    .bind(user_id)
                    .fetch_one(pool)
                    .await?;

            Ok((rows.iter().map(row_to_contact).collect(), total))
        }
    }
}

/// Duplicate pre-check: does this owner already have a contact with this
/// (lowercased) email?
pub async fn owner_has_email(
    pool: &PgPool,
    user_id: Uuid,
    email: &str,
) -> Result<bool, sqlx::Error> {
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM contacts WHERE user_id = $1 AND email = $2",
    )
    .bind(user_id)
    .bind(email)
    .fetch_one(pool)
    .await?;

    Ok(count > 0)
}

pub async fn create_contact(pool: &PgPool, new: NewContact) -> Result<Contact, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let row = sqlx::query(&format!(
        r#"
        INSERT INTO contacts
            (id, user_id, name, email, company, phone, notes, tags, is_lead, lead_source,
             created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11)
        RETURNING {CONTACT_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(new.user_id)
    .bind(&new.name)
    .bind(&new.email)
    .bind(&new.company)
    .bind(&new.phone)
    .bind(&new.notes)
    .bind(&new.tags)
    .bind(new.is_lead)
    .bind(new.lead_source.as_str())
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(row_to_contact(&row))
}

/// Fetch a contact scoped by id and owner.
pub async fn get_contact_for_owner(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
) -> Result<Option<Contact>, sqlx::Error> {
    let row = sqlx::query(&format!(
        "SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = $1 AND user_id = $2"
    ))
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(row_to_contact))
}

/// Write back the mutable fields of an owned contact.
pub async fn update_contact(
    pool: &PgPool,
    user_id: Uuid,
    contact: &Contact,
) -> Result<Option<Contact>, sqlx::Error> {
    let now = Utc::now();

    let row = sqlx::query(&format!(
        r#"
        UPDATE contacts
        SET name = $3, email = $4, company = $5, phone = $6, notes = $7, tags = $8,
            updated_at = $9
        WHERE id = $1 AND user_id = $2
        RETURNING {CONTACT_COLUMNS}
        "#
    ))
    .bind(contact.id)
    .bind(user_id)
    .bind(&contact.name)
    .bind(&contact.email)
    .bind(&contact.company)
    .bind(&contact.phone)
    .bind(&contact.notes)
    .bind(&contact.tags)
    .bind(now)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(row_to_contact))
}

/// Owner-scoped hard delete. Returns false when nothing matched.
pub async fn delete_contact(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM contacts WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn count_for_user(pool: &PgPool, user_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contacts WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
}
