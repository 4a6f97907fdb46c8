//! Argon2id password hashing.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::Rng;

use crate::server::error::internal::InternalError;

/// Hashes a password with Argon2id default parameters and a random 128-bit salt.
///
/// # Returns
/// - `Ok(String)` - PHC formatted hash string
/// - `Err(InternalError::PasswordHash)` - Salt encoding or hashing failed
pub fn hash_password(password: &str) -> Result<String, InternalError> {
    let mut salt_bytes = [0u8; 16];
    rand::rng().fill(&mut salt_bytes);

    let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| InternalError::PasswordHash {
        reason: e.to_string(),
    })?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| InternalError::PasswordHash {
            reason: e.to_string(),
        })
}

/// Verifies a password against a stored PHC hash.
///
/// Unparseable hashes (such as the placeholder stored for unusable passwords) never verify.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
