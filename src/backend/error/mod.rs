//! Backend Error Module
//!
//! This module defines the error taxonomy used by HTTP handlers and
//! middleware. Every variant converts into an HTTP response.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions and client-facing messages
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Types
//!
//! - `BadRequest` - malformed or missing input, client-fixable (400)
//! - `Unauthenticated` - missing/invalid/expired token or failed login (401)
//! - `Internal` - storage outages and other unexpected faults (500)
//!
//! Internal errors are logged with their full context when converted into a
//! response; the client only ever sees a generic message.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::{messages, ApiError};
