//! Middleware Module
//!
//! HTTP middleware run before handlers.
//!
//! - **`auth`** - Bearer-token verification for protected routes
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use fundal_api::backend::middleware::require_auth;
//!
//! let protected = Router::new()
//!     .route("/me", get(get_me))
//!     .route_layer(from_fn_with_state(app_state.clone(), require_auth));
//! ```

pub mod auth;

pub use auth::{bearer_token, require_auth, AuthUser, AuthenticatedUser};
