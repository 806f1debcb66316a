//! Authentication test helpers
//!
//! Provides an in-memory `UserStore`, test users and a `TestServer` wired
//! with the real router.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum_test::TestServer;
use fundal_api::backend::auth::sessions::TokenService;
use fundal_api::backend::auth::{User, UserStore};
use fundal_api::backend::routes::create_router;
use fundal_api::backend::server::{AppState, AuthConfig};

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_PASSWORD: &str = "clave123";

/// In-memory user store keyed by lowercase email
#[derive(Default)]
pub struct MemoryUserStore {
    users: HashMap<String, User>,
    lookups: AtomicUsize,
    fail: bool,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose every lookup fails like an unreachable database
    pub fn unavailable() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.users.insert(user.email.to_lowercase(), user);
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(self.users.get(email).cloned())
    }
}

/// Build a user row
pub fn test_user(id: i64, email: &str, password_hash: &str, active: bool) -> User {
    User {
        id,
        role: "terapeuta".to_string(),
        first_name: "Ana".to_string(),
        last_name: "Pérez".to_string(),
        email: email.to_string(),
        password_hash: password_hash.to_string(),
        active,
    }
}

/// bcrypt hash at the minimum cost
pub fn hash_password(password: &str) -> String {
    bcrypt::hash(password, 4).expect("Failed to hash test password")
}

pub fn auth_config(secret: &str) -> AuthConfig {
    AuthConfig {
        jwt_secret: secret.to_string(),
        token_ttl: Duration::from_secs(2 * 60 * 60),
    }
}

/// Token service sharing the test server's secret
pub fn token_service() -> TokenService {
    TokenService::new(&auth_config(TEST_SECRET))
}

/// Test server over the real router
pub fn create_test_server(store: Arc<MemoryUserStore>) -> TestServer {
    let state = AppState::new(&auth_config(TEST_SECRET), store);
    TestServer::new(create_router(state)).expect("Failed to create test server")
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
