/**
 * Email Handlers
 *
 * Inbox endpoints: the demo sync, the filtered list, and the read and
 * important flag toggles. Every query is owner-scoped; an id owned by
 * another user answers 404.
 *
 * Sync replaces any previously generated demo batch before inserting the
 * new one, so repeated syncs leave exactly one batch per user.
 */

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use uuid::Uuid;

use crate::auth::users;
use crate::emails::db;
use crate::emails::sync::{demo_inbox, preview_body};
use crate::emails::types::{
    EmailListQuery, EmailListResponse, EmailPreview, EmailResponse, ImportantFlag,
    MarkImportantRequest, MarkImportantResponse, SyncRequest, SyncResponse,
};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;
use crate::shared::{page_params, MessageResponse, Pagination};

/// POST /api/email/sync
pub async fn sync_emails(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    payload: Option<Json<SyncRequest>>,
) -> Result<Json<SyncResponse>, ApiError> {
    let user = users::get_user_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    let provider = payload.and_then(|Json(request)| request.provider);
    let now = chrono::Utc::now();

    let batch = demo_inbox(&user.name, &user.email, provider.as_deref(), now);

    let purged = db::purge_demo_emails(&state.pool, user.id).await?;
    if purged > 0 {
        tracing::debug!(user_id = %user.id, purged, "replaced previous demo batch");
    }

    for message in &batch {
        db::insert_email(&state.pool, user.id, message).await?;
    }

    users::mark_synced(
        &state.pool,
        user.id,
        provider.as_deref().unwrap_or("gmail"),
        now,
    )
    .await?;

    tracing::info!(user_id = %user.id, synced = batch.len(), "inbox sync completed");

    let previews = batch
        .iter()
        .map(|message| EmailPreview {
            id: message.message_id.clone(),
            subject: message.subject.clone(),
            sender: message.sender.clone(),
            body: preview_body(&message.body),
            is_read: message.is_read,
            is_important: message.is_important,
            received_at: message.received_at,
        })
        .collect::<Vec<_>>();

    Ok(Json(SyncResponse {
        message: "Email sync completed successfully".to_string(),
        synced: previews.len(),
        emails: previews,
    }))
}

/// GET /api/emails
pub async fn list_emails(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Query(query): Query<EmailListQuery>,
) -> Result<Json<EmailListResponse>, ApiError> {
    let (limit, offset) = page_params(query.limit, query.offset);
    let unread_only = query.unread.unwrap_or(false);
    let important_only = query.important.unwrap_or(false);

    let (emails, total) = db::list_emails(
        &state.pool,
        auth.user_id,
        unread_only,
        important_only,
        limit,
        offset,
    )
    .await?;

    Ok(Json(EmailListResponse {
        emails: emails.iter().map(EmailResponse::from).collect(),
        pagination: Pagination::new(total, limit, offset),
    }))
}

/// PUT /api/emails/{id}/read
///
/// One-way transition; marking an already-read message again succeeds.
pub async fn mark_read(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !db::mark_read(&state.pool, id, auth.user_id).await? {
        return Err(ApiError::not_found("Email not found"));
    }

    Ok(Json(MessageResponse::new("Email marked as read")))
}

/// PUT /api/emails/{id}/important
pub async fn mark_important(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<MarkImportantRequest>,
) -> Result<Json<MarkImportantResponse>, ApiError> {
    let important = request.important.unwrap_or(false);

    let is_important = db::set_important(&state.pool, id, auth.user_id, important)
        .await?
        .ok_or_else(|| ApiError::not_found("Email not found"))?;

    let message = if is_important {
        "Email marked as important"
    } else {
        "Email marked as not important"
    };

    Ok(Json(MarkImportantResponse {
        message: message.to_string(),
        email: ImportantFlag {
            id: id.to_string(),
            is_important,
        },
    }))
}
