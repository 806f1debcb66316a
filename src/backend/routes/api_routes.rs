/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /auth/login` - User login (public)
 * - `GET /auth/me` - Current user info (requires bearer token)
 *
 * ## Health
 * - `GET /health` - Liveness probe
 */

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};

use crate::backend::auth::{get_me, login};
use crate::backend::middleware::require_auth;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Routes registered before `route_layer` are protected by `require_auth`;
/// `/auth/login` is added after it and stays public.
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let auth_routes = Router::new()
        .route("/me", get(get_me))
        .route_layer(middleware::from_fn_with_state(app_state.clone(), require_auth))
        .route("/login", post(login));

    router
        .nest("/auth", auth_routes)
        .route("/health", get(health))
}

/// Liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}
