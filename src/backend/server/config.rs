/**
 * Server Configuration
 *
 * This module loads the process configuration from environment variables
 * once at startup and opens the PostgreSQL connection pool.
 *
 * # Environment
 *
 * - `DATABASE_URL` - PostgreSQL connection string (required)
 * - `DATABASE_MAX_CONNECTIONS` - pool size (default 10)
 * - `PORT` - listen port (default 3000)
 * - `JWT_SECRET` - HMAC signing secret (required)
 * - `JWT_EXPIRES` - token lifetime, seconds or an expression like `2h` (default `2h`)
 *
 * # Error Handling
 *
 * Missing or malformed values are startup errors. Nothing here is read again
 * after `Config` is built; components receive the values they need from it.
 */

use std::fmt;
use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use thiserror::Error;

/// Token lifetime used when `JWT_EXPIRES` is unset
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(2 * 60 * 60);

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Configuration errors raised at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset or blank
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    /// A variable is set to something that cannot be parsed
    #[error("invalid value for {var}: {reason}")]
    InvalidVar {
        /// Variable name
        var: &'static str,
        /// What was wrong with it
        reason: String,
    },
}

/// Settings for token signing and verification
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC secret shared by issuer and verifier
    pub jwt_secret: String,
    /// Lifetime of issued tokens
    pub token_ttl: Duration,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

/// Process-wide configuration, built once in `main`
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub auth: AuthConfig,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"<redacted>")
            .field("database_max_connections", &self.database_max_connections)
            .field("port", &self.port)
            .field("auth", &self.auth)
            .finish()
    }
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?;

        let database_max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::InvalidVar {
                    var: "DATABASE_MAX_CONNECTIONS",
                    reason: format!("expected a positive integer, got {raw:?}"),
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::InvalidVar {
                var: "PORT",
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::MissingVar("JWT_SECRET"))?;

        let token_ttl = match get("JWT_EXPIRES") {
            Some(raw) => parse_token_ttl(&raw)?,
            None => DEFAULT_TOKEN_TTL,
        };

        Ok(Self {
            database_url,
            database_max_connections,
            port,
            auth: AuthConfig {
                jwt_secret,
                token_ttl,
            },
        })
    }
}

/// Parse a token lifetime
///
/// A bare integer is a number of seconds. Anything else must be a number
/// followed by a unit, e.g. `90s`, `15m`, `2h`, `1.5 hours`, `7d`.
pub fn parse_token_ttl(raw: &str) -> Result<Duration, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidVar {
        var: "JWT_EXPIRES",
        reason,
    };

    let value = raw.trim();
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        let secs = value
            .parse::<u64>()
            .map_err(|e| invalid(format!("{value:?}: {e}")))?;
        return Ok(Duration::from_secs(secs));
    }

    let split = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(split);
    let unit = unit.trim().to_ascii_lowercase();

    let amount: f64 = number
        .parse()
        .map_err(|_| invalid(format!("{raw:?} does not start with a number")))?;

    let unit_ms: f64 = match unit.as_str() {
        "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => 1.0,
        "s" | "sec" | "secs" | "second" | "seconds" => 1_000.0,
        "m" | "min" | "mins" | "minute" | "minutes" => 60_000.0,
        "h" | "hr" | "hrs" | "hour" | "hours" => 3_600_000.0,
        "d" | "day" | "days" => 86_400_000.0,
        "w" | "week" | "weeks" => 604_800_000.0,
        "y" | "yr" | "yrs" | "year" | "years" => 31_557_600_000.0,
        "" => return Err(invalid(format!("{raw:?} has no unit"))),
        other => return Err(invalid(format!("unknown unit {other:?}"))),
    };

    let millis = amount * unit_ms;
    if !millis.is_finite() || millis > u64::MAX as f64 {
        return Err(invalid(format!("{raw:?} is out of range")));
    }

    Ok(Duration::from_millis(millis.round() as u64))
}

/// Open the PostgreSQL pool and apply migrations
///
/// Connection failure is returned to the caller. Migration failure is logged
/// and startup continues, since the `usuarios` table may already be managed
/// outside this service.
pub async fn load_database(config: &Config) -> Result<PgPool, sqlx::Error> {
    tracing::info!(
        max_connections = config.database_max_connections,
        "Connecting to database..."
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Database connection pool created successfully");

    match sqlx::migrate!().run(&pool).await {
        Ok(()) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {:?}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Ok(pool)
}
