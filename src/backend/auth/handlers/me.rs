/**
 * Get Current User Handler
 *
 * GET /auth/me returns the profile carried by the caller's token. The route
 * sits behind `require_auth`, which has already verified the token and
 * attached its claims; no database round-trip is made.
 */

use axum::Json;

use crate::backend::auth::users::UserProfile;
use crate::backend::middleware::auth::AuthUser;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - no authenticated context on the request
///
/// # Example Response
///
/// ```json
/// { "id": 7, "rol": "terapeuta", "nombre": "Ana", "apellido": "Pérez", "email": "ana@fundal.org" }
/// ```
pub async fn get_me(AuthUser(user): AuthUser) -> Json<UserProfile> {
    Json(user.claims.profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::sessions::Claims;
    use crate::backend::middleware::auth::AuthenticatedUser;

    #[tokio::test]
    async fn test_get_me_returns_claims_profile() {
        let profile = UserProfile {
            id: 2,
            role: "recepcion".to_string(),
            first_name: "Rosa".to_string(),
            last_name: "Díaz".to_string(),
            email: "rosa@fundal.org".to_string(),
        };
        let user = AuthenticatedUser {
            claims: Claims {
                profile: profile.clone(),
                iat: 0,
                exp: i64::MAX,
            },
        };

        let Json(response) = get_me(AuthUser(user)).await;
        assert_eq!(response, profile);
    }
}
