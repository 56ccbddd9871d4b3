/**
 * API Route Configuration
 *
 * Route tables for the public and protected halves of the API.
 *
 * # Public
 * - `POST /api/auth/register` - create an account
 * - `POST /api/auth/login` - authenticate
 * - `POST /api/contact-sales` - sales-lead intake
 * - `GET /api/health` - liveness and database state
 *
 * # Protected (bearer token required)
 * - `GET/PUT /api/auth/profile`
 * - `GET/POST /api/contacts`, `PUT/DELETE /api/contacts/{id}`
 * - `POST /api/email/sync`, `GET /api/emails`
 * - `PUT /api/emails/{id}/read`, `PUT /api/emails/{id}/important`
 * - `GET /api/dashboard/stats`
 */

use axum::routing::{get, post, put};
use axum::Router;

use crate::auth::{get_profile, login, put_profile, register};
use crate::contacts::{
    create_contact, create_sales_lead, delete_contact, list_contacts, update_contact,
};
use crate::dashboard::get_stats;
use crate::emails::{list_emails, mark_important, mark_read, sync_emails};
use crate::middleware::auth::auth_middleware;
use crate::routes::health::health_check;
use crate::server::state::AppState;

/// Routes that require no credentials.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/contact-sales", post(create_sales_lead))
        .route("/api/health", get(health_check))
}

/// Routes behind the auth middleware. Handlers receive the verified
/// identity through the `AuthUser` extractor.
pub fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/auth/profile", get(get_profile).put(put_profile))
        .route("/api/contacts", get(list_contacts).post(create_contact))
        .route(
            "/api/contacts/{id}",
            put(update_contact).delete(delete_contact),
        )
        .route("/api/email/sync", post(sync_emails))
        .route("/api/emails", get(list_emails))
        .route("/api/emails/{id}/read", put(mark_read))
        .route("/api/emails/{id}/important", put(mark_important))
        .route("/api/dashboard/stats", get(get_stats))
        .layer(axum::middleware::from_fn_with_state(state, auth_middleware))
}
