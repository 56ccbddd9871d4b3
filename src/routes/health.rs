/**
 * Health Check
 *
 * GET /api/health (public). Probes the database with a trivial query and
 * reports process uptime; load balancers and the demo frontend poll this.
 */

use axum::{extract::State, response::Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::server::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub database: &'static str,
    /// Seconds since process start.
    pub uptime: f64,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => "Connected",
        Err(e) => {
            tracing::warn!("health probe failed: {e}");
            "Disconnected"
        }
    };

    Json(HealthResponse {
        status: "OK",
        timestamp: Utc::now(),
        database,
        uptime: state.started_at.elapsed().as_secs_f64(),
    })
}
