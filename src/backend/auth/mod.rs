//! Authentication Module
//!
//! This module handles user authentication: checking credentials against
//! the `usuarios` table, issuing session tokens, and serving the current
//! user's profile.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── credentials.rs  - Password check (bcrypt + legacy plaintext)
//! ├── users.rs        - User model and lookup
//! ├── sessions.rs     - JWT issuance and verification
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── login.rs    - User authentication handler
//!     └── me.rs       - Get current user handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: email + password → user lookup → credential check → JWT returned
//! 2. **Me**: bearer JWT → verified by middleware → profile from claims returned
//!
//! # Security
//!
//! - Stored credentials are bcrypt hashes, except legacy accounts still
//!   holding plaintext (see `credentials`)
//! - Tokens are stateless HS256 JWTs, 2 hours by default
//! - Failed logins return one undistinguished 401

/// Password verification
pub mod credentials;

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{LoginRequest, LoginResponse};
pub use handlers::{get_me, login};
pub use users::{PgUserStore, User, UserProfile, UserStore};
