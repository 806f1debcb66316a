/**
 * Session Tokens
 *
 * This module issues and verifies the HS256 JWTs handed out by the login
 * endpoint. Tokens are self-contained: there is no server-side session
 * table, so a token is valid exactly when its signature checks out against
 * the configured secret and its `exp` has not passed.
 */

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::auth::users::UserProfile;
use crate::backend::server::config::AuthConfig;

/// JWT claims structure
///
/// The profile fields sit at the top level of the payload next to `iat`
/// and `exp`: `{ id, rol, nombre, apellido, email, iat, exp }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Identity of the token holder
    #[serde(flatten)]
    pub profile: UserProfile,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Token errors
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error("token has expired")]
    Expired,

    #[error("invalid token: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

/// Issues and verifies session tokens
///
/// Built once from `AuthConfig` at startup and shared read-only.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            ttl: config.token_ttl,
        }
    }

    /// Lifetime applied to issued tokens
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a token for a user, valid from now
    pub fn issue(&self, profile: &UserProfile) -> Result<String, TokenError> {
        self.issue_at(profile, Utc::now().timestamp())
    }

    /// Create a token as if issued at `issued_at` (Unix seconds)
    pub fn issue_at(&self, profile: &UserProfile, issued_at: i64) -> Result<String, TokenError> {
        let ttl = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);
        let claims = Claims {
            profile: profile.clone(),
            iat: issued_at,
            exp: issued_at.saturating_add(ttl),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(TokenError::Signing)
    }

    /// Verify signature and expiry, returning the decoded claims
    ///
    /// A token is rejected from the second its `exp` is reached.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e),
            })?;

        // jsonwebtoken still accepts exp == now
        if claims.exp <= Utc::now().timestamp() {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(secret: &str, ttl_secs: u64) -> TokenService {
        TokenService::new(&AuthConfig {
            jwt_secret: secret.to_string(),
            token_ttl: Duration::from_secs(ttl_secs),
        })
    }

    fn profile() -> UserProfile {
        UserProfile {
            id: 7,
            role: "terapeuta".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Pérez".to_string(),
            email: "ana@fundal.org".to_string(),
        }
    }

    #[test]
    fn test_issue_and_verify() {
        let tokens = service("secret", 7200);
        let token = tokens.issue(&profile()).unwrap();
        assert!(!token.is_empty());

        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.profile, profile());
        assert_eq!(claims.exp - claims.iat, 7200);
    }

    #[test]
    fn test_payload_keys() {
        let claims = Claims {
            profile: profile(),
            iat: 1,
            exp: 2,
        };
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "rol": "terapeuta",
                "nombre": "Ana",
                "apellido": "Pérez",
                "email": "ana@fundal.org",
                "iat": 1,
                "exp": 2,
            })
        );
    }

    #[test]
    fn test_expired_token_rejected() {
        let tokens = service("secret", 60);
        let issued_at = Utc::now().timestamp() - 120;
        let token = tokens.issue_at(&profile(), issued_at).unwrap();

        assert!(matches!(tokens.verify(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn test_token_rejected_at_exact_expiry() {
        let tokens = service("secret", 60);
        let issued_at = Utc::now().timestamp() - 60;
        let token = tokens.issue_at(&profile(), issued_at).unwrap();

        assert!(matches!(tokens.verify(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn test_token_valid_until_expiry() {
        let tokens = service("secret", 60);
        let issued_at = Utc::now().timestamp() - 30;
        let token = tokens.issue_at(&profile(), issued_at).unwrap();

        assert!(tokens.verify(&token).is_ok());
    }

    #[test]
    fn test_other_secret_rejected() {
        let token = service("secret-a", 7200).issue(&profile()).unwrap();
        let result = service("secret-b", 7200).verify(&token);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let tokens = service("secret", 7200);
        let token = tokens.issue(&profile()).unwrap();
        let forged = tokens
            .issue(&UserProfile {
                role: "admin".to_string(),
                ..profile()
            })
            .unwrap();

        // Admin payload with the original signature
        let parts: Vec<&str> = token.split('.').collect();
        let forged_payload = forged.split('.').nth(1).unwrap();
        let spliced = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);

        assert!(tokens.verify(&spliced).is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        let tokens = service("secret", 7200);
        assert!(matches!(
            tokens.verify("invalid.token.here"),
            Err(TokenError::Invalid(_))
        ));
        assert!(tokens.verify("").is_err());
    }
}
