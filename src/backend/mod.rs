//! Backend Module
//!
//! This module contains all server-side code for the FUNDAL API.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential checks, JWT tokens, user lookup, handlers
//! - **`middleware`** - Bearer-token request authorization
//! - **`error`** - API error taxonomy and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary entry point
//! ├── server/         - Config, state and initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the token service and the user store behind `Arc`s.
//! Both are built once at startup and never mutated afterwards, so handlers
//! share them without any locking.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, ApiError>`. `ApiError` maps to 400, 401 or 500
//! and internal failures never leak detail to the client.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user lookup
pub mod auth;

/// Middleware for request processing
pub mod middleware;

pub use error::ApiError;
pub use server::create_app;
