/**
 * User Model and Database Operations
 *
 * This module handles the `usuarios` rows read by the login flow. The auth
 * core only ever reads users; account management lives elsewhere.
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// User row from `usuarios`
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// Role name (admin, terapeuta, ...)
    #[sqlx(rename = "rol")]
    pub role: String,
    /// Given name
    #[sqlx(rename = "nombre")]
    pub first_name: String,
    /// Family name
    #[sqlx(rename = "apellido")]
    pub last_name: String,
    /// Email address, unique ignoring case
    pub email: String,
    /// Stored credential: a bcrypt hash or a legacy plaintext password
    pub password_hash: String,
    /// Whether the account may log in
    #[sqlx(rename = "activo")]
    pub active: bool,
}

/// Public view of a user
///
/// Returned to clients and embedded in session tokens. Never carries the
/// stored credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    #[serde(rename = "rol")]
    pub role: String,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    pub email: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            role: user.role.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Normalize an email for lookup: trimmed and lowercased
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Read access to user records
///
/// Implementations must return at most one row per email and must not hold a
/// pooled connection beyond the single lookup query.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by normalized email, active or not
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error>;
}

/// PostgreSQL-backed user store
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, rol, nombre, apellido, email, password_hash, activo
            FROM usuarios
            WHERE lower(email) = $1
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
