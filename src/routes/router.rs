/**
 * Router Assembly
 *
 * Combines the public and protected route tables, the JSON 404 fallback,
 * and the CORS and request-tracing layers into the final application
 * router.
 */

use axum::http::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    HeaderValue, Method, StatusCode,
};
use axum::response::Json;
use axum::Router;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::{protected_routes, public_routes};
use crate::server::config::Config;
use crate::server::state::AppState;

/// Build the application router.
pub fn create_router(state: AppState) -> Router {
    public_routes()
        .merge(protected_routes(state.clone()))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config))
        .with_state(state)
}

/// CORS policy: the configured browser origin, or any origin when none is
/// configured (the development default).
fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    let origin = config
        .allowed_origin
        .as_deref()
        .and_then(|o| o.parse::<HeaderValue>().ok());

    match origin {
        Some(origin) => layer.allow_origin(origin),
        None => layer.allow_origin(Any),
    }
}

async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "API endpoint not found" })),
    )
}
