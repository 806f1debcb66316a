/**
 * Credential Verification
 *
 * Checks a submitted password against the value stored in
 * `usuarios.password_hash`. Two storage formats coexist:
 *
 * - bcrypt hashes (`$2a$`, `$2b$`, `$2x$`, `$2y$`), verified with bcrypt's
 *   constant-time comparison
 * - legacy plaintext passwords, compared directly
 *
 * The plaintext branch is insecure and only exists until every account has
 * been rehashed. Callers go through `verify_password` and never look at the
 * stored format themselves, so removing the branch is local to this file.
 */

use thiserror::Error;

/// Prefix shared by every bcrypt hash variant
const BCRYPT_PREFIX: &str = "$2";

/// Credential verification errors
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The blocking verification task did not complete
    #[error("password verification task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

/// Storage format of a credential, detected from its prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoredCredential<'a> {
    /// No credential stored; never matches
    Empty,
    /// One-way bcrypt hash
    Bcrypt(&'a str),
    /// Legacy plaintext password
    LegacyPlaintext(&'a str),
}

impl<'a> StoredCredential<'a> {
    /// Classify a stored credential string
    pub fn classify(stored: &'a str) -> Self {
        if stored.is_empty() {
            Self::Empty
        } else if stored.starts_with(BCRYPT_PREFIX) {
            Self::Bcrypt(stored)
        } else {
            Self::LegacyPlaintext(stored)
        }
    }
}

/// Check a plaintext password against a stored credential
///
/// bcrypt runs on the blocking thread pool so other requests keep
/// progressing while the hash is computed. A stored value with the bcrypt
/// prefix that bcrypt cannot parse is logged and treated as a mismatch.
///
/// # Errors
///
/// * `TaskFailed` - the blocking task panicked or was cancelled
pub async fn verify_password(input: &str, stored: &str) -> Result<bool, CredentialError> {
    match StoredCredential::classify(stored) {
        StoredCredential::Empty => Ok(false),
        StoredCredential::Bcrypt(hash) => {
            let input = input.to_owned();
            let hash = hash.to_owned();
            let result = tokio::task::spawn_blocking(move || bcrypt::verify(input, &hash)).await?;
            match result {
                Ok(valid) => Ok(valid),
                Err(e) => {
                    tracing::warn!("Stored bcrypt hash could not be parsed: {}", e);
                    Ok(false)
                }
            }
        }
        StoredCredential::LegacyPlaintext(plain) => {
            // TODO: rehash to bcrypt on successful login once usuarios accepts writes from this service
            Ok(input == plain)
        }
    }
}
