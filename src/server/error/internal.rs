use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to hash a password or parse a stored hash.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Password hashing failed: {reason}")]
    PasswordHash {
        /// The underlying hashing error message
        reason: String,
    },

    /// A stored authenticator key could not be decoded or used to build a TOTP.
    #[error("Invalid authenticator key for user {user_id}: {reason}")]
    AuthenticatorKey {
        /// The user owning the key
        user_id: i32,
        /// The reason the key was rejected
        reason: String,
    },
}
