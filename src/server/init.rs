/**
 * Server Initialization
 *
 * Connects the database pool, runs migrations, builds the application
 * state, and assembles the router. `main` only has to bind and serve.
 */

use axum::Router;
use sqlx::postgres::PgPoolOptions;

use crate::routes::router::create_router;
use crate::server::config::Config;
use crate::server::state::AppState;

/// Create the Axum application.
///
/// Fails if the database is unreachable or migrations cannot be applied;
/// every endpoint needs the store, so there is no degraded mode.
pub async fn create_app(config: Config) -> Result<Router, Box<dyn std::error::Error>> {
    tracing::info!("connecting to database");
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await?;
    tracing::info!("database connection pool created");

    sqlx::migrate!().run(&pool).await?;
    tracing::info!("database migrations applied");

    let state = AppState::new(pool, config);
    Ok(create_router(state))
}
