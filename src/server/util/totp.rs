//! Time-based one-time passwords for authenticator apps.
//!
//! Keys are 160-bit random secrets stored base32 encoded. Codes are 6 digits using
//! SHA-1 with a 30 second step and one step of clock skew either way, which is what
//! common authenticator apps expect.

use chrono::{DateTime, Utc};
use rand::Rng;
use totp_rs::{Algorithm, Secret, TOTP};

const KEY_BYTES: usize = 20;
const DIGITS: usize = 6;
const SKEW: u8 = 1;
const STEP_SECONDS: u64 = 30;

/// Generates a new random authenticator key as unpadded base32.
pub fn generate_key() -> Result<String, String> {
    let mut bytes = [0u8; KEY_BYTES];
    rand::rng().fill(&mut bytes);

    Ok(build_totp(bytes.to_vec())?.get_secret_base32())
}

/// Checks a user-entered code against a base32 key at the given unix time.
///
/// Spaces and dashes in the code are ignored. Anything that is not exactly six
/// digits after stripping is rejected without computing a TOTP.
///
/// # Returns
/// - `Ok(true)` - Code is valid within the allowed skew
/// - `Ok(false)` - Code is malformed or does not match
/// - `Err(String)` - Stored key could not be decoded
pub fn verify_code(key: &str, code: &str, unix_seconds: u64) -> Result<bool, String> {
    let code = strip_code(code);
    if code.len() != DIGITS || !code.chars().all(|c| c.is_ascii_digit()) {
        return Ok(false);
    }

    let totp = totp_for_key(key)?;
    Ok(totp.check(&code, unix_seconds))
}

/// Produces the current code for a key. Used to drive login flows in tests.
#[cfg(test)]
pub fn generate_code(key: &str, unix_seconds: u64) -> Result<String, String> {
    Ok(totp_for_key(key)?.generate(unix_seconds))
}

/// Seconds since the unix epoch, as the TOTP functions expect.
pub fn unix_seconds(now: DateTime<Utc>) -> u64 {
    u64::try_from(now.timestamp()).unwrap_or_default()
}

/// Formats a key for manual entry: lowercase, in space separated groups of four.
pub fn format_shared_key(key: &str) -> String {
    let lower = key.to_lowercase();
    let chars: Vec<char> = lower.chars().collect();

    chars
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds the `otpauth://` provisioning URI rendered as a QR code by clients.
pub fn authenticator_uri(issuer: &str, account: &str, key: &str) -> String {
    let issuer = encode(issuer);

    format!(
        "otpauth://totp/{}:{}?secret={}&issuer={}&digits={}",
        issuer,
        encode(account),
        key,
        issuer,
        DIGITS
    )
}

fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

fn strip_code(code: &str) -> String {
    code.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

fn totp_for_key(key: &str) -> Result<TOTP, String> {
    let bytes = Secret::Encoded(key.to_string())
        .to_bytes()
        .map_err(|e| format!("{:?}", e))?;

    build_totp(bytes)
}

fn build_totp(secret: Vec<u8>) -> Result<TOTP, String> {
    TOTP::new(Algorithm::SHA1, DIGITS, SKEW, STEP_SECONDS, secret).map_err(|e| format!("{:?}", e))
}
