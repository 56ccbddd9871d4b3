/**
 * Email Types
 *
 * Row type and request/response bodies for the inbox endpoints. The
 * sender and each recipient are name/address pairs; recipients are stored
 * as a JSONB list.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::Pagination;

/// A name/address pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailAddress {
    pub name: String,
    pub email: String,
}

/// An inbox message row.
#[derive(Debug, Clone)]
pub struct Email {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Provider-assigned id, unique across the whole store.
    pub message_id: String,
    pub subject: String,
    pub sender: EmailAddress,
    pub recipients: Vec<EmailAddress>,
    pub body: String,
    pub html_body: Option<String>,
    pub is_read: bool,
    pub is_important: bool,
    pub labels: Vec<String>,
    pub thread_id: Option<String>,
    pub received_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for the emails table.
#[derive(Debug, Clone)]
pub struct NewEmail {
    pub message_id: String,
    pub subject: String,
    pub sender: EmailAddress,
    pub recipients: Vec<EmailAddress>,
    pub body: String,
    pub is_read: bool,
    pub is_important: bool,
    pub labels: Vec<String>,
    pub received_at: DateTime<Utc>,
}

/// Body for POST /api/email/sync.
#[derive(Debug, Default, Deserialize)]
pub struct SyncRequest {
    pub provider: Option<String>,
}

/// Query parameters for GET /api/emails.
#[derive(Debug, Deserialize)]
pub struct EmailListQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub unread: Option<bool>,
    pub important: Option<bool>,
}

/// Body for PUT /api/emails/{id}/important. A missing flag clears the
/// marker, mirroring a plain boolean coercion at the boundary.
#[derive(Debug, Deserialize)]
pub struct MarkImportantRequest {
    pub important: Option<bool>,
}

/// Public view of an inbox message.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailResponse {
    pub id: String,
    pub message_id: String,
    pub subject: String,
    pub sender: EmailAddress,
    pub recipients: Vec<EmailAddress>,
    pub body: String,
    pub is_read: bool,
    pub is_important: bool,
    pub labels: Vec<String>,
    pub received_at: DateTime<Utc>,
}

impl From<&Email> for EmailResponse {
    fn from(email: &Email) -> Self {
        Self {
            id: email.id.to_string(),
            message_id: email.message_id.clone(),
            subject: email.subject.clone(),
            sender: email.sender.clone(),
            recipients: email.recipients.clone(),
            body: email.body.clone(),
            is_read: email.is_read,
            is_important: email.is_important,
            labels: email.labels.clone(),
            received_at: email.received_at,
        }
    }
}

/// Truncated view returned by the sync endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailPreview {
    /// The provider-assigned message id.
    pub id: String,
    pub subject: String,
    pub sender: EmailAddress,
    pub body: String,
    pub is_read: bool,
    pub is_important: bool,
    pub received_at: DateTime<Utc>,
}

/// Body for GET /api/emails.
#[derive(Debug, Serialize)]
pub struct EmailListResponse {
    pub emails: Vec<EmailResponse>,
    pub pagination: Pagination,
}

/// Body for POST /api/email/sync.
#[derive(Debug, Serialize)]
pub struct SyncResponse {
    pub message: String,
    pub synced: usize,
    pub emails: Vec<EmailPreview>,
}

/// Flag state echoed by PUT /api/emails/{id}/important.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportantFlag {
    pub id: String,
    pub is_important: bool,
}

/// Body for PUT /api/emails/{id}/important.
#[derive(Debug, Serialize)]
pub struct MarkImportantResponse {
    pub message: String,
    pub email: ImportantFlag,
}
