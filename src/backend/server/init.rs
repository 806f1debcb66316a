/**
 * Server Initialization
 *
 * Builds the Axum application from a loaded `Config`:
 * 1. Open the PostgreSQL pool (and run migrations)
 * 2. Build the token service and user store into `AppState`
 * 3. Create the router
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::users::PgUserStore;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, Config};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns the connection error if the database cannot be reached.
pub async fn create_app(config: &Config) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing FUNDAL API server");

    let pool = load_database(config).await?;
    let users = Arc::new(PgUserStore::new(pool));
    let app_state = AppState::new(&config.auth, users);

    tracing::info!(
        token_ttl_secs = app_state.tokens.ttl().as_secs(),
        "Router configured"
    );

    Ok(create_router(app_state))
}
