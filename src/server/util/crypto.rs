//! Random token generation and one-way hashing for stored secrets.
//!
//! Confirmation tokens, reset tokens and recovery codes are handed to the user in
//! plain text and only their SHA-256 digest is persisted.

use rand::Rng;
use sha2::{Digest, Sha256};

/// Alphabet for recovery codes.
const RECOVERY_CODE_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a random 256-bit token encoded as 64 lowercase hex characters.
pub fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill(&mut bytes);
    hex::encode(bytes)
}

/// Computes the lowercase hex SHA-256 digest of the input.
pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

/// Generates a recovery code in the `xxxxx-xxxxx` format.
pub fn generate_recovery_code() -> String {
    let mut rng = rand::rng();
    let chars: String = (0..10)
        .map(|_| {
            let idx = rng.random_range(0..RECOVERY_CODE_CHARSET.len());
            RECOVERY_CODE_CHARSET[idx] as char
        })
        .collect();

    format!("{}-{}", &chars[..5], &chars[5..])
}

/// Normalises user-entered recovery codes so `ABCDE-12345`, `abcde12345` and
/// ` abcde 12345 ` hash identically.
pub fn normalize_recovery_code(code: &str) -> String {
    code.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}
