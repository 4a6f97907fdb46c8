//! Two-factor authentication management for a signed-in user.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::AuthSettings,
    data::{recovery_code::RecoveryCodeRepository, user::UserRepository},
    error::{auth::AuthError, internal::InternalError, AppError},
    model::{
        two_factor::{AuthenticatorSetup, RecoveryCodes, TwoFactorStatus},
        user::User,
    },
    service::email::{template::EmailTemplate, EmailService},
    util::{crypto, totp},
};

/// Number of recovery codes issued at a time.
pub const RECOVERY_CODE_COUNT: usize = 10;

pub struct TwoFactorService<'a> {
    db: &'a DatabaseConnection,
    email: &'a EmailService,
    settings: &'a AuthSettings,
}

impl<'a> TwoFactorService<'a> {
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

    pub async fn status(&self, user: &User) -> Result<TwoFactorStatus, AppError> {
        let recovery_codes_left = RecoveryCodeRepository::new(self.db)
            .count_unused(user.id)
            .await?;

        Ok(TwoFactorStatus {
            enabled: user.two_factor_enabled,
            has_authenticator: user.authenticator_key.is_some(),
            recovery_codes_left,
        })
    }

    /// Returns the key and provisioning URI for an authenticator app.
    ///
    /// Generates and stores a key on first use; afterwards the same key is returned
    /// until `reset_authenticator` replaces it.
    pub async fn authenticator_setup(&self, user: &User) -> Result<AuthenticatorSetup, AppError> {
        let key = match user.authenticator_key.clone() {
            Some(key) => key,
            None => self.replace_key(user.id).await?,
        };

        Ok(AuthenticatorSetup {
            shared_key: totp::format_shared_key(&key),
            authenticator_uri: totp::authenticator_uri(
                &self.settings.two_factor_issuer,
                &user.email,
                &key,
            ),
        })
    }

    /// Turns on 2FA after the user proves their authenticator produces valid codes.
    ///
    /// # Returns
    /// - `Ok(RecoveryCodes)` - Ten fresh recovery codes, shown once
    /// - `Err(AppError::BadRequest)` - No authenticator key set up yet
    /// - `Err(AuthError::InvalidTwoFactorCode)` - Code did not verify
    pub async fn enable(&self, user: &User, code: &str) -> Result<RecoveryCodes, AppError> {
        let Some(key) = user.authenticator_key.as_deref() else {
            return Err(AppError::BadRequest(
                "Set up an authenticator app before enabling two-factor authentication"
                    .to_string(),
            ));
        };

        let valid = totp::verify_code(key, code, totp::unix_seconds(Utc::now())).map_err(
            |reason| InternalError::AuthenticatorKey {
                user_id: user.id,
                reason,
            },
        )?;
        if !valid {
            return Err(AuthError::InvalidTwoFactorCode.into());
        }

        UserRepository::new(self.db)
            .set_two_factor_enabled(user.id, true)
            .await?;
        let codes = self.replace_recovery_codes(user.id).await?;

        tracing::info!("User {} enabled two-factor authentication", user.id);

        self.email
            .send_or_log(
                &user.email,
                EmailTemplate::TwoFactorEnabled {
                    username: user.username.clone(),
                },
            )
            .await;

        Ok(codes)
    }

    /// Turns off 2FA. The authenticator key is kept so re-enabling needs no new setup.
    pub async fn disable(&self, user: &User) -> Result<(), AppError> {
        UserRepository::new(self.db)
            .set_two_factor_enabled(user.id, false)
            .await?;

        tracing::info!("User {} disabled two-factor authentication", user.id);

        Ok(())
    }

    /// Disables 2FA and replaces the authenticator key.
    pub async fn reset_authenticator(&self, user: &User) -> Result<(), AppError> {
        UserRepository::new(self.db)
            .set_two_factor_enabled(user.id, false)
            .await?;
        self.replace_key(user.id).await?;

        tracing::info!("User {} reset their authenticator key", user.id);

        Ok(())
    }

    /// Invalidates all existing recovery codes and issues new ones.
    pub async fn regenerate_recovery_codes(&self, user: &User) -> Result<RecoveryCodes, AppError> {
        if !user.two_factor_enabled {
            return Err(AuthError::TwoFactorNotEnabled.into());
        }

        self.replace_recovery_codes(user.id).await
    }

    async fn replace_key(&self, user_id: i32) -> Result<String, AppError> {
        let key = totp::generate_key()
            .map_err(|reason| InternalError::AuthenticatorKey { user_id, reason })?;

        UserRepository::new(self.db)
            .set_authenticator_key(user_id, key.clone())
            .await?;

        Ok(key)
    }

    async fn replace_recovery_codes(&self, user_id: i32) -> Result<RecoveryCodes, AppError> {
        let codes: Vec<String> = (0..RECOVERY_CODE_COUNT)
            .map(|_| crypto::generate_recovery_code())
            .collect();
        let hashes = codes
            .iter()
            .map(|code| crypto::sha256_hex(&crypto::normalize_recovery_code(code)))
            .collect();

        RecoveryCodeRepository::new(self.db)
            .replace_all(user_id, hashes)
            .await?;

        Ok(RecoveryCodes(codes))
    }
}
