/**
 * API Error Types
 *
 * This module defines the errors returned by handlers and middleware.
 *
 * # Error Categories
 *
 * ## Bad Request
 *
 * Produced where input is validated, returned as-is with its message.
 *
 * ## Unauthenticated
 *
 * Produced by the token middleware and the login handler. Login failures use
 * one shared message whatever the cause, so responses cannot be used to
 * enumerate accounts.
 *
 * ## Internal
 *
 * Carries a diagnostic context string that is logged server-side and never
 * sent to the client.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Client-facing error messages
pub mod messages {
    /// Login body without email or password
    pub const MISSING_CREDENTIALS: &str = "Faltan credenciales";
    /// Unknown email, inactive user or wrong password
    pub const INVALID_CREDENTIALS: &str = "Usuario/clave inválidos";
    /// No bearer token on a protected route
    pub const MISSING_TOKEN: &str = "No autorizado";
    /// Bearer token that fails signature or expiry checks
    pub const INVALID_TOKEN: &str = "Token inválido";
    /// Handler reached without an authenticated context
    pub const NOT_AUTHENTICATED: &str = "No autenticado";
    /// Any internal fault
    pub const INTERNAL: &str = "Error interno";
}

/// API error taxonomy
///
/// # Usage
///
/// ```rust
/// use fundal_api::backend::error::{messages, ApiError};
///
/// let err = ApiError::unauthenticated(messages::INVALID_CREDENTIALS);
/// assert_eq!(err.status_code().as_u16(), 401);
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input
    #[error("Bad request: {message}")]
    BadRequest {
        /// Message returned to the client
        message: String,
    },

    /// Missing, invalid or expired token, or a failed login
    #[error("Unauthenticated: {message}")]
    Unauthenticated {
        /// Message returned to the client
        message: String,
    },

    /// Unexpected failure (storage unreachable, corrupt data, ...)
    #[error("Internal error: {context}")]
    Internal {
        /// Diagnostic detail, logged but never returned
        context: String,
    },
}

impl ApiError {
    /// Create a 400 error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create a 401 error
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated {
            message: message.into(),
        }
    }

    /// Create a 500 error with diagnostic context
    pub fn internal(context: impl Into<String>) -> Self {
        Self::Internal {
            context: context.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message that is safe to return to the client
    pub fn public_message(&self) -> &str {
        match self {
            Self::BadRequest { message } | Self::Unauthenticated { message } => message,
            Self::Internal { .. } => messages::INTERNAL,
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::internal(format!("database error: {err}"))
    }
}
