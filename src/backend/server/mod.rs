//! Server Module
//!
//! Configuration, application state and initialization for the Axum server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - Environment configuration and database pool
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `Config::from_env()` in `main`
//! 2. **Database**: pool creation and migrations
//! 3. **State Creation**: token service + user store
//! 4. **Router Creation**: routes and layers

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use config::{AuthConfig, Config, ConfigError};
pub use init::create_app;
pub use state::AppState;
