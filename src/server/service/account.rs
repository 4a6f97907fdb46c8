//! Account management for the signed-in user.

use sea_orm::DatabaseConnection;

use crate::server::{
    config::AuthSettings,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::{auth::AuthService, email::EmailService},
    util::password,
    validation::credentials::{validate_email, validate_password},
};

pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
    email: &'a EmailService,
    settings: &'a AuthSettings,
}

impl<'a> AccountService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        email: &'a EmailService,
        settings: &'a AuthSettings,
    ) -> Self {
        Self {
            db,
            email,
            settings,
        }
    }

    /// Replaces the password after checking the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(AuthError::IncorrectPassword)` - Current password did not verify
    /// - `Err(AppError::ValidationErr)` - New password rejected
    pub async fn change_password(
        &self,
        user: &User,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        if !password::verify_password(current_password, &user.password_hash) {
            return Err(AuthError::IncorrectPassword.into());
        }

        let new_password = validate_password(new_password)?;
        let password_hash = password::hash_password(&new_password)?;

        UserRepository::new(self.db)
            .update_password(user.id, password_hash)
            .await?;

        tracing::info!("User {} changed their password", user.id);

        Ok(())
    }

    /// Moves the account to a new email address and asks for it to be confirmed.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user with `email_confirmed = false`
    /// - `Err(AppError::BadRequest)` - Same address as the current one
    /// - `Err(AppError::Conflict)` - Address belongs to another account
    pub async fn change_email(&self, user: &User, new_email: &str) -> Result<User, AppError> {
        let new_email = validate_email(new_email)?;
        let user_repo = UserRepository::new(self.db);

        if new_email == user.email {
            return Err(AppError::BadRequest(
                "New email matches the current email".to_string(),
            ));
        }
        if user_repo.email_exists(&new_email, Some(user.id)).await? {
            return Err(AppError::Conflict("Email is already registered".to_string()));
        }

        user_repo.update_email(user.id, new_email).await?;

        let updated = user_repo
            .find_by_id(user.id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(user.id))?;

        AuthService::new(self.db, self.email, self.settings)
            .send_confirmation(&updated)
            .await?;

        tracing::info!("User {} changed their email address", user.id);

        Ok(updated)
    }

    /// Deletes the account and everything it owns after checking the password.
    pub async fn delete_account(&self, user: &User, password: &str) -> Result<(), AppError> {
        if !password::verify_password(password, &user.password_hash) {
            return Err(AuthError::IncorrectPassword.into());
        }

        UserRepository::new(self.db).delete(user.id).await?;

        tracing::info!("User {} deleted their account", user.id);

        Ok(())
    }
}
