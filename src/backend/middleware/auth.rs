/**
 * Authentication Middleware
 *
 * This module protects routes that require a logged-in user. It reads the
 * bearer token from the `Authorization` header, verifies it, and attaches
 * the decoded claims to the request for downstream handlers.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::{Claims, TokenService};
use crate::backend::error::{messages, ApiError};

/// Authenticated user data extracted from the JWT
///
/// Lives in the request extensions for the lifetime of a single request.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub claims: Claims,
}

/// Extract the token from an `Authorization: Bearer <token>` header
///
/// Any other scheme, a missing header or an empty token yields `None`.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies signature and expiry
/// 3. Attaches `AuthenticatedUser` to request extensions
///
/// Returns 401 if the token is missing or invalid.
pub async fn require_auth(
    State(tokens): State<Arc<TokenService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers()).ok_or_else(|| {
        tracing::warn!(path = %request.uri().path(), "Missing bearer token");
        ApiError::unauthenticated(messages::MISSING_TOKEN)
    })?;

    let claims = tokens.verify(token).map_err(|e| {
        tracing::warn!(path = %request.uri().path(), "Rejected token: {}", e);
        ApiError::unauthenticated(messages::INVALID_TOKEN)
    })?;

    tracing::debug!(user_id = claims.profile.id, "Request authenticated");
    request
        .extensions_mut()
        .insert(AuthenticatedUser { claims });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Rejects with 401 when the request did not pass through `require_auth`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::unauthenticated(messages::NOT_AUTHENTICATED)
            })?;

        Ok(AuthUser(user))
    }
}
