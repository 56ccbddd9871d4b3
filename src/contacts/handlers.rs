/**
 * Contact Handlers
 *
 * Owner-scoped CRUD for the address book, plus the public sales-lead
 * intake. Updates and deletes match on id AND owner, so a valid id owned
 * by someone else looks exactly like a missing record (404).
 */

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;

use crate::contacts::db;
use crate::contacts::types::{
    ContactEnvelope, ContactListQuery, ContactListResponse, ContactResponse,
    CreateContactRequest, LeadSource, NewContact, SalesLeadRequest, SalesLeadResponse,
    UpdateContactRequest,
};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;
use crate::shared::{page_params, MessageResponse, Pagination};
use crate::validation::{is_valid_email, is_valid_name, normalize_email};

/// GET /api/contacts
pub async fn list_contacts(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Query(query): Query<ContactListQuery>,
) -> Result<Json<ContactListResponse>, ApiError> {
    let (limit, offset) = page_params(query.limit, query.offset);

    let (contacts, total) = db::list_contacts(
        &state.pool,
        auth.user_id,
        query.search.as_deref(),
        limit,
        offset,
    )
    .await?;

    Ok(Json(ContactListResponse {
        contacts: contacts.iter().map(ContactResponse::from).collect(),
        pagination: Pagination::new(total, limit, offset),
    }))
}

/// POST /api/contacts
pub async fn create_contact(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Json(request): Json<CreateContactRequest>,
) -> Result<(StatusCode, Json<ContactEnvelope>), ApiError> {
    let (Some(name), Some(email)) = (request.name, request.email) else {
        return Err(ApiError::validation("Name and email are required"));
    };

    let email = normalize_email(&email);
    if !is_valid_email(&email) {
        return Err(ApiError::validation("Invalid email format"));
    }

    if db::owner_has_email(&state.pool, auth.user_id, &email).await? {
        return Err(ApiError::duplicate(
            "Contact with this email already exists",
        ));
    }

    let contact = db::create_contact(
        &state.pool,
        NewContact {
            user_id: Some(auth.user_id),
            name: name.trim().to_string(),
            email,
            company: request.company.unwrap_or_default(),
            phone: request.phone.unwrap_or_default(),
            notes: request.notes.unwrap_or_default(),
            tags: request.tags.unwrap_or_default(),
            is_lead: false,
            lead_source: LeadSource::default(),
        },
    )
    .await?;

    tracing::info!(user_id = %auth.user_id, contact_id = %contact.id, "contact created");

    Ok((
        StatusCode::CREATED,
        Json(ContactEnvelope {
            message: "Contact created successfully".to_string(),
            contact: ContactResponse::from(&contact),
        }),
    ))
}

/// PUT /api/contacts/{id}
pub async fn update_contact(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateContactRequest>,
) -> Result<Json<ContactEnvelope>, ApiError> {
    let mut contact = db::get_contact_for_owner(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Contact not found"))?;

    if let Some(name) = &request.name {
        if !name.is_empty() {
            if !is_valid_name(name) {
                return Err(ApiError::validation(
                    "Name must be at least 2 characters long",
                ));
            }
            contact.name = name.trim().to_string();
        }
    }
    if let Some(email) = &request.email {
        if !email.is_empty() {
            let email = normalize_email(email);
            if !is_valid_email(&email) {
                return Err(ApiError::validation("Invalid email format"));
            }
            contact.email = email;
        }
    }
    if let Some(company) = request.company {
        contact.company = company;
    }
    if let Some(phone) = request.phone {
        contact.phone = phone;
    }
    if let Some(notes) = request.notes {
        contact.notes = notes;
    }
    if let Some(tags) = request.tags {
        contact.tags = tags;
    }

    let contact = db::update_contact(&state.pool, auth.user_id, &contact)
        .await?
        .ok_or_else(|| ApiError::not_found("Contact not found"))?;

    Ok(Json(ContactEnvelope {
        message: "Contact updated successfully".to_string(),
        contact: ContactResponse::from(&contact),
    }))
}

/// DELETE /api/contacts/{id}
pub async fn delete_contact(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !db::delete_contact(&state.pool, id, auth.user_id).await? {
        return Err(ApiError::not_found("Contact not found"));
    }

    tracing::info!(user_id = %auth.user_id, contact_id = %id, "contact deleted");

    Ok(Json(MessageResponse::new("Contact deleted successfully")))
}

/// POST /api/contact-sales (public)
///
/// Stores the submission as an ownerless lead contact. The free-form
/// message and team size land in the notes field.
pub async fn create_sales_lead(
    State(state): State<AppState>,
    Json(request): Json<SalesLeadRequest>,
) -> Result<(StatusCode, Json<SalesLeadResponse>), ApiError> {
    let (Some(name), Some(email), Some(company)) = (request.name, request.email, request.company)
    else {
        return Err(ApiError::validation("Name, email, and company are required"));
    };

    let email = normalize_email(&email);
    if !is_valid_email(&email) {
        return Err(ApiError::validation("Invalid email format"));
    }

    let notes = format!(
        "Sales lead: {}. Team size: {}",
        request.message.as_deref().unwrap_or("No message provided"),
        request.team_size.as_deref().unwrap_or("Not specified"),
    );

    let lead = db::create_contact(
        &state.pool,
        NewContact {
            user_id: None,
            name: name.trim().to_string(),
            email,
            company: company.trim().to_string(),
            phone: request.phone.unwrap_or_default(),
            notes,
            tags: vec!["sales-lead".to_string(), "website".to_string()],
            is_lead: true,
            lead_source: LeadSource::Website,
        },
    )
    .await?;

    tracing::info!(lead_id = %lead.id, "sales lead submitted");

    Ok((
        StatusCode::CREATED,
        Json(SalesLeadResponse {
            message: "Thank you for your interest! Our team will contact you soon.".to_string(),
            lead_id: lead.id.to_string(),
        }),
    ))
}
