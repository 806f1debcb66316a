/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Require both email and password
 * 2. Look up the user by normalized email
 * 3. Check the account is active and the password matches
 * 4. Issue a session token and return it with the public profile
 *
 * # Security
 *
 * - Unknown email, inactive account and wrong password all produce the same
 *   401 body, so the endpoint cannot be used to probe for accounts
 * - Passwords and tokens are never logged or echoed back
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::backend::auth::credentials::verify_password;
use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::{normalize_email, UserProfile, UserStore};
use crate::backend::error::{messages, ApiError};

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - body missing, unreadable, or without email/password
/// * `401 Unauthorized` - no such user, inactive user, or wrong password
/// * `500 Internal Server Error` - storage failure, failed hashing task, signing failure
///
/// # Example Request
///
/// ```http
/// POST /auth/login HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "ana@fundal.org", "password": "clave123" }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "usuario": { "id": 7, "rol": "terapeuta", "nombre": "Ana", "apellido": "Pérez", "email": "ana@fundal.org" }
/// }
/// ```
pub async fn login(
    State(tokens): State<Arc<TokenService>>,
    State(users): State<Arc<dyn UserStore>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!("Unreadable login body: {}", rejection);
            LoginRequest::default()
        }
    };

    let (email, password) = match (request.email, request.password) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            (email, password)
        }
        _ => return Err(ApiError::bad_request(messages::MISSING_CREDENTIALS)),
    };

    let email = normalize_email(&email);
    tracing::info!("Login request for: {}", email);

    let user = users.find_by_email(&email).await?;

    let user = match user {
        Some(user) if user.active => user,
        Some(user) => {
            tracing::warn!(user_id = user.id, "Login attempt on inactive account");
            return Err(ApiError::unauthenticated(messages::INVALID_CREDENTIALS));
        }
        None => {
            tracing::warn!("User not found: {}", email);
            return Err(ApiError::unauthenticated(messages::INVALID_CREDENTIALS));
        }
    };

    let valid = verify_password(&password, &user.password_hash)
        .await
        .map_err(|e| {
            ApiError::internal(format!("credential check for user {} failed: {e}", user.id))
        })?;

    if !valid {
        tracing::warn!(user_id = user.id, "Invalid password");
        return Err(ApiError::unauthenticated(messages::INVALID_CREDENTIALS));
    }

    let profile = UserProfile::from(&user);
    let token = tokens
        .issue(&profile)
        .map_err(|e| {
            ApiError::internal(format!("token issuance for user {} failed: {e}", user.id))
        })?;

    tracing::info!(user_id = user.id, role = %user.role, "User logged in successfully");

    Ok(Json(LoginResponse {
        token,
        user: profile,
    }))
}
