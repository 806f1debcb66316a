/**
 * Authentication Handler Types
 *
 * Request and response bodies for the `/auth` endpoints.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::UserProfile;

/// Login request
///
/// Both fields are optional at the serde level so that a missing field is
/// reported as a 400 with the API's own message rather than a JSON rejection.
#[derive(Deserialize, Debug, Default)]
pub struct LoginRequest {
    /// User's email address (any case, surrounding whitespace ignored)
    #[serde(default)]
    pub email: Option<String>,
    /// User's password
    #[serde(default)]
    pub password: Option<String>,
}

/// Login response
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    /// Signed session token
    pub token: String,
    /// Public profile of the logged-in user
    #[serde(rename = "usuario")]
    pub user: UserProfile,
}
