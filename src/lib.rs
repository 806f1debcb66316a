//! FUNDAL API - Main Library
//!
//! REST backend for the FUNDAL therapy centre. This crate currently carries the
//! authentication surface of the API: login against the `usuarios` table,
//! JWT issuance, and bearer-token protection for downstream routes.
//!
//! # Module Structure
//!
//! - **`backend`** - Axum HTTP server
//!   - Server configuration, state and initialization
//!   - Route assembly (`/auth/*`, `/health`)
//!   - Authentication (credentials, JWT sessions, handlers)
//!   - Bearer-token middleware
//!   - API error taxonomy
//!
//! # Usage
//!
//! ```rust,no_run
//! use fundal_api::backend::server::{config::Config, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `backend::error::ApiError` for request-time failures (400 / 401 / 500)
//! - `backend::server::config::ConfigError` for startup failures

/// Backend server-side code
pub mod backend;
