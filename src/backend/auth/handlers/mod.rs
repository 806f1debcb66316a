//! Authentication Handlers Module
//!
//! HTTP handlers for the `/auth` endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── login.rs    - User authentication handler
//! └── me.rs       - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`login`** - POST /auth/login - User authentication
//! - **`get_me`** - GET /auth/me - Current user info (behind `require_auth`)

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

pub use types::{LoginRequest, LoginResponse};

pub use login::login;
pub use me::get_me;
