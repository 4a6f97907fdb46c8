//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the keys relevant
//! to its concern:
//! - `AuthSession` - the signed-in user's ID and session lifecycle
//! - `TwoFactorSession` - the user who passed the password step and still owes a
//!   second factor

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_TWO_FACTOR_USER_ID: &str = "auth:two_factor_user";

/// Authentication session management.
///
/// Handles storing and retrieving the authenticated user's ID along with the
/// session lifecycle operations used on login and logout.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    ///
    /// # Returns
    /// A new AuthSession instance
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's ID in the session.
    ///
    /// Called after successful authentication to establish a logged-in session.
    ///
    /// # Arguments
    /// - `user_id` - ID of the authenticated user
    ///
    /// # Returns
    /// - `Ok(())` - User ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the signed-in user's ID from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let user_id = self.session.get::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    /// Issues a new session ID while keeping the session data.
    ///
    /// Called when privileges change (sign-in) so a session ID planted before
    /// login cannot be reused afterwards.
    pub async fn cycle_id(&self) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        Ok(())
    }

    /// Deletes the session and all of its data from the store.
    ///
    /// Used during logout and account deletion.
    pub async fn flush(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

/// Pending second-factor state.
///
/// Between a successful password check and a successful TOTP or recovery code
/// the user is remembered here instead of in `AuthSession`, so none of the
/// authenticated endpoints accept them yet.
pub struct TwoFactorSession<'a> {
    session: &'a Session,
}

impl<'a> TwoFactorSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Marks the user as having passed the password step.
    ///
    /// Any user already signed in on this session is signed out first.
    pub async fn set_pending_user(&self, user_id: i32) -> Result<(), AppError> {
        self.session.remove::<i32>(SESSION_AUTH_USER_ID).await?;
        self.session
            .insert(SESSION_AUTH_TWO_FACTOR_USER_ID, user_id)
            .await?;
        Ok(())
    }

    /// Returns the pending user without clearing it.
    ///
    /// A wrong code leaves the user pending so they can retry until lockout.
    pub async fn get_pending_user(&self) -> Result<Option<i32>, AppError> {
        let user_id = self
            .session
            .get::<i32>(SESSION_AUTH_TWO_FACTOR_USER_ID)
            .await?;
        Ok(user_id)
    }

    /// Retrieves and removes the pending user.
    pub async fn take_pending_user(&self) -> Result<Option<i32>, AppError> {
        let user_id = self
            .session
            .remove::<i32>(SESSION_AUTH_TWO_FACTOR_USER_ID)
            .await?;
        Ok(user_id)
    }
}
