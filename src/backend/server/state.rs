/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Thread Safety
 *
 * Everything in `AppState` is built at startup and only read afterwards:
 * - `Arc<TokenService>` holds the signing/verification keys and token TTL
 * - `Arc<dyn UserStore>` wraps the connection pool, which does its own
 *   checkout bookkeeping
 *
 * # State Extraction
 *
 * Handlers and middleware extract only the part they need, e.g.
 * `State(tokens): State<Arc<TokenService>>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::UserStore;
use crate::backend::server::config::AuthConfig;

/// Application state shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Token issuer and verifier
    pub tokens: Arc<TokenService>,

    /// User lookup
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(auth: &AuthConfig, users: Arc<dyn UserStore>) -> Self {
        Self {
            tokens: Arc::new(TokenService::new(auth)),
            users,
        }
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for Arc<dyn UserStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}
