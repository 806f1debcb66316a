//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation and layers
//! └── api_routes.rs   - API endpoint registration
//! ```
//!
//! # Routes
//!
//! - `POST /auth/login` - User login
//! - `GET /auth/me` - Current user (bearer token required)
//! - `GET /health` - Liveness probe

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

pub use router::create_router;
