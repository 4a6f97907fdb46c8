//! Admin bootstrap code service.
//!
//! When the database has no admin, startup generates a one-time code and logs it.
//! A registration that supplies the code becomes the first admin. Codes live in
//! memory for 15 minutes and are invalidated after successful use or expiration.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Time-to-live for admin codes.
const ADMIN_CODE_TTL: Duration = Duration::from_secs(15 * 60);

const CODE_LENGTH: usize = 32;

/// Stored admin code with expiration timestamp.
#[derive(Clone)]
struct AdminCode {
    code: String,
    expires_at: Instant,
}

impl AdminCode {
    fn new(code: String, ttl: Duration) -> Self {
        Self {
            code,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn matches(&self, input: &str) -> bool {
        self.code == input.trim()
    }
}

/// Service holding the current admin bootstrap code, if any.
///
/// Clones share the same code, so the instance created at startup can be handed
/// to the application state and used by the registration flow.
#[derive(Clone)]
pub struct AdminCodeService {
    code: Arc<RwLock<Option<AdminCode>>>,
    ttl: Duration,
}

impl AdminCodeService {
    /// Creates a new AdminCodeService with no active code.
    pub fn new() -> Self {
        Self::with_ttl(ADMIN_CODE_TTL)
    }

    /// Creates a service whose codes expire after `ttl`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
            ttl,
        }
    }

    /// Generates a new random admin code, replacing any previous one.
    ///
    /// # Returns
    /// - `String` - The generated 32-character alphanumeric code
    pub async fn generate(&self) -> String {
        let code_string = Self::generate_random_code();
        let admin_code = AdminCode::new(code_string.clone(), self.ttl);
        *self.code.write().await = Some(admin_code);
        code_string
    }

    /// Validates the provided code against the stored admin code.
    ///
    /// A matching code is consumed so it cannot be used twice. An expired code is
    /// dropped and fails validation. A wrong code leaves the stored code in place.
    ///
    /// # Arguments
    /// - `input_code` - The code supplied at registration
    ///
    /// # Returns
    /// - `true` - Code matched and had not expired; it is now consumed
    /// - `false` - Code doesn't match, is expired, or no code exists
    pub async fn validate_and_consume(&self, input_code: &str) -> bool {
        let mut code = self.code.write().await;

        if let Some(stored_code) = code.as_ref() {
            if stored_code.is_expired() {
                *code = None;
                return false;
            }

            if stored_code.matches(input_code) {
                *code = None;
                return true;
            }
        }

        false
    }

    fn generate_random_code() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";

        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }

    /// Checks if an unexpired admin code is stored, dropping an expired one.
    #[cfg(test)]
    pub async fn has_valid_code(&self) -> bool {
        let mut code = self.code.write().await;

        if let Some(stored_code) = code.as_ref() {
            if stored_code.is_expired() {
                *code = None;
                return false;
            }
            return true;
        }

        false
    }
}

impl Default for AdminCodeService {
    fn default() -> Self {
        Self::new()
    }
}
