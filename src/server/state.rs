/**
 * Application State
 *
 * The `AppState` struct is the single context object constructed at process
 * start and injected into every handler. It carries the database pool, the
 * configuration, and the process start time used by the health endpoint.
 */

use std::sync::Arc;
use std::time::Instant;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::server::config::Config;

/// Shared application state.
///
/// Cheap to clone: the pool is internally reference-counted and the
/// configuration sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool.
    pub pool: PgPool,
    /// Runtime configuration.
    pub config: Arc<Config>,
    /// Process start time, for the health endpoint's uptime field.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(pool: PgPool, config: Config) -> Self {
        Self {
            pool,
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }
}

/// Allow handlers that only need the pool to extract it directly.
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}
