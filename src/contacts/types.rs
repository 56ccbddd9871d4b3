/**
 * Contact Types
 *
 * Row type, lead-source enumeration, and the request/response bodies for
 * the contacts endpoints and the public sales-lead form.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::Pagination;

/// Where a lead came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LeadSource {
    Website,
    #[default]
    Email,
    Referral,
    Social,
    Other,
}

impl LeadSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Email => "email",
            Self::Referral => "referral",
            Self::Social => "social",
            Self::Other => "other",
        }
    }

    /// Parse the stored form; unknown values fall back to the default.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "website" => Some(Self::Website),
            "email" => Some(Self::Email),
            "referral" => Some(Self::Referral),
            "social" => Some(Self::Social),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// A contact row. `user_id` is `None` only for sales leads.
#[derive(Debug, Clone)]
pub struct Contact {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub notes: String,
    pub tags: Vec<String>,
    pub is_lead: bool,
    pub lead_source: LeadSource,
    pub last_contacted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for the contacts table.
#[derive(Debug)]
pub struct NewContact {
    pub user_id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub notes: String,
    pub tags: Vec<String>,
    pub is_lead: bool,
    pub lead_source: LeadSource,
}

/// Query parameters for GET /api/contacts.
#[derive(Debug, Deserialize)]
pub struct ContactListQuery {
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Body for POST /api/contacts. Required fields are optional here so the
/// handler can answer with a 400 message instead of a body rejection.
#[derive(Debug, Deserialize)]
pub struct CreateContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Body for PUT /api/contacts/{id}. Absent fields are left untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Body for the public POST /api/contact-sales form.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesLeadRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub team_size: Option<String>,
}

/// Public view of a contact.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub id: String,
    pub user_id: Option<String>,
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub notes: String,
    pub tags: Vec<String>,
    pub is_lead: bool,
    pub lead_source: LeadSource,
    pub last_contacted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Contact> for ContactResponse {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id.to_string(),
            user_id: contact.user_id.map(|id| id.to_string()),
            name: contact.name.clone(),
            email: contact.email.clone(),
            company: contact.company.clone(),
            phone: contact.phone.clone(),
            notes: contact.notes.clone(),
            tags: contact.tags.clone(),
            is_lead: contact.is_lead,
            lead_source: contact.lead_source,
            last_contacted_at: contact.last_contacted_at,
            created_at: contact.created_at,
            updated_at: contact.updated_at,
        }
    }
}

/// Body for GET /api/contacts.
#[derive(Debug, Serialize)]
pub struct ContactListResponse {
    pub contacts: Vec<ContactResponse>,
    pub pagination: Pagination,
}

/// Body for contact create/update.
#[derive(Debug, Serialize)]
pub struct ContactEnvelope {
    pub message: String,
    pub contact: ContactResponse,
}

/// Body for a sales-lead submission.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesLeadResponse {
    pub message: String,
    pub lead_id: String,
}
