use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session.
    #[error("No user ID found in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The user lacks a required permission.
    ///
    /// # Fields
    /// - User ID that attempted the action
    /// - Description of what was denied (logged only)
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Unknown login or wrong password.
    #[error("Invalid login attempt")]
    InvalidCredentials,

    /// Too many failed attempts; sign-in is blocked until the given instant.
    #[error("User locked out until {0}")]
    LockedOut(DateTime<Utc>),

    /// Login attempted before the email address was confirmed.
    #[error("Email address not confirmed")]
    EmailNotConfirmed,

    /// A second-factor step was attempted without a pending password login.
    #[error("No pending two-factor login in session")]
    TwoFactorNotPending,

    /// Authenticator code did not verify.
    #[error("Invalid authenticator code")]
    InvalidTwoFactorCode,

    /// Recovery code does not match any unused code.
    #[error("Invalid recovery code")]
    InvalidRecoveryCode,

    /// Email confirmation or password reset token is unknown, used or expired.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Operation requires two-factor authentication to be enabled.
    #[error("Two-factor authentication is not enabled")]
    TwoFactorNotEnabled,

    /// Current password supplied for an account change did not verify.
    #[error("Incorrect password")]
    IncorrectPassword,
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages are deliberately generic and never reveal whether a given
/// account exists.
///
/// # Returns
/// - 400 Bad Request - For invalid tokens, incorrect current password, 2FA not enabled
/// - 401 Unauthorized - For missing sessions, bad credentials and bad second factors
/// - 403 Forbidden - For permission failures and unconfirmed email
/// - 423 Locked - For locked out accounts
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "You must be logged in.")
            }
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied."),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid login attempt."),
            Self::LockedOut(_) => (
                StatusCode::LOCKED,
                "This account has been locked out, please try again later.",
            ),
            Self::EmailNotConfirmed => (
                StatusCode::FORBIDDEN,
                "You must confirm your email address before logging in.",
            ),
            Self::TwoFactorNotPending => (
                StatusCode::UNAUTHORIZED,
                "Unable to load two-factor authentication user, please log in again.",
            ),
            Self::InvalidTwoFactorCode => {
                (StatusCode::UNAUTHORIZED, "Invalid authenticator code.")
            }
            Self::InvalidRecoveryCode => {
                (StatusCode::UNAUTHORIZED, "Invalid recovery code entered.")
            }
            Self::InvalidToken => (StatusCode::BAD_REQUEST, "Invalid or expired token."),
            Self::TwoFactorNotEnabled => (
                StatusCode::BAD_REQUEST,
                "Two-factor authentication is not enabled.",
            ),
            Self::IncorrectPassword => (StatusCode::BAD_REQUEST, "Incorrect password."),
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
