//! Authentication service.
//!
//! Registration, email confirmation, password and second-factor sign-in, lockout
//! bookkeeping and password reset. Session handling stays in the controller: the
//! service only reports who signed in and whether a second factor is still owed.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;
use url::Url;

use crate::server::{
    config::AuthSettings,
    data::{
        recovery_code::RecoveryCodeRepository, user::UserRepository,
        user_token::UserTokenRepository,
    },
    error::{auth::AuthError, internal::InternalError, AppError},
    model::user::{CreateUserParams, TokenPurpose, User},
    service::{
        admin::code::AdminCodeService,
        email::{template::EmailTemplate, EmailService},
    },
    util::{crypto, password, totp},
    validation::credentials::{validate_email, validate_password, CredentialsBuilder},
};

/// Failed attempts allowed before the account is locked.
pub const MAX_FAILED_ACCESS_ATTEMPTS: i32 = 5;

/// How long a lockout lasts.
pub const LOCKOUT_DURATION_MINUTES: i64 = 5;

/// Registration input before validation.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub username: String,
    pub email: String,
    pub password: String,
    pub admin_code: Option<String>,
}

/// Result of a password sign-in.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Password accepted; the user must still supply a TOTP or recovery code.
    TwoFactorRequired(i32),
    SignedIn(User),
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    email: &'a EmailService,
    settings: &'a AuthSettings,
}

impl<'a> AuthService<'a> {
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

    /// Registers a new account and emails a confirmation link.
    ///
    /// The admin code is only checked (and consumed) once the input is otherwise
    /// valid, so a typo in the username does not burn the bootstrap code.
    ///
    /// # Returns
    /// - `Ok(User)` - Newly created, unconfirmed user
    /// - `Err(AppError::ValidationErr)` - Username, email or password rejected
    /// - `Err(AppError::Conflict)` - Username or email already registered
    pub async fn register(
        &self,
        params: RegisterParams,
        admin_codes: &AdminCodeService,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let credentials = CredentialsBuilder::new()
            .username(params.username)
            .email(params.email)
            .password(params.password)
            .build()?;

        if user_repo.username_exists(&credentials.username).await? {
            return Err(AppError::Conflict("Username is already taken".to_string()));
        }
        if user_repo.email_exists(&credentials.email, None).await? {
            return Err(AppError::Conflict("Email is already registered".to_string()));
        }

        let admin = match params.admin_code {
            Some(code) => {
                let valid = admin_codes.validate_and_consume(&code).await;
                if !valid {
                    tracing::warn!(
                        "Registration for {} supplied an invalid admin code",
                        credentials.username
                    );
                }
                valid
            }
            None => false,
        };

        let password_hash = password::hash_password(&credentials.password)?;

        let user = user_repo
            .create(CreateUserParams {
                username: credentials.username,
                email: credentials.email,
                password_hash,
                admin,
                email_confirmed: false,
            })
            .await?;

        if admin {
            tracing::info!("User {} registered as admin using the admin code", user.id);
        } else {
            tracing::info!("User {} registered", user.id);
        }

        self.send_confirmation(&user).await?;

        Ok(user)
    }

    /// Replaces any outstanding confirmation token and emails a new link.
    pub async fn send_confirmation(&self, user: &User) -> Result<(), AppError> {
        let token = self
            .issue_token(user.id, TokenPurpose::EmailConfirmation)
            .await?;
        let link = self.link(
            "confirm-email",
            &[("user_id", user.id.to_string()), ("token", token)],
        )?;

        self.email
            .send(
                &user.email,
                EmailTemplate::ConfirmEmail {
                    username: user.username.clone(),
                    link,
                },
            )
            .await?;

        Ok(())
    }

    /// Confirms a user's email address with the emailed token.
    ///
    /// # Returns
    /// - `Ok(())` - Email confirmed and token consumed
    /// - `Err(AuthError::InvalidToken)` - Token unknown, for another user, or expired
    pub async fn confirm_email(&self, user_id: i32, token: &str) -> Result<(), AppError> {
        let token_repo = UserTokenRepository::new(self.db);

        token_repo
            .find_valid(
                user_id,
                TokenPurpose::EmailConfirmation,
                &crypto::sha256_hex(token.trim()),
                Utc::now(),
            )
            .await?
            .ok_or(AuthError::InvalidToken)?;

        UserRepository::new(self.db)
            .set_email_confirmed(user_id, true)
            .await?;
        token_repo
            .delete_for_user(user_id, TokenPurpose::EmailConfirmation)
            .await?;

        tracing::info!("User {} confirmed their email address", user_id);

        Ok(())
    }

    /// Sends a fresh confirmation link if the address belongs to an unconfirmed account.
    ///
    /// Succeeds silently otherwise so callers cannot probe for registered emails.
    pub async fn resend_confirmation(&self, email: &str) -> Result<(), AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_email(email.trim()).await? else {
            return Ok(());
        };

        if !user.email_confirmed {
            self.send_confirmation(&user).await?;
        }

        Ok(())
    }

    /// Checks a username-or-email and password.
    ///
    /// A lockout is checked before the password so a locked account gives no hint
    /// about whether the password was right. A wrong password counts toward lockout.
    ///
    /// # Returns
    /// - `Ok(LoginOutcome::SignedIn)` - Credentials valid and no second factor needed
    /// - `Ok(LoginOutcome::TwoFactorRequired)` - Credentials valid, 2FA enabled
    /// - `Err(AuthError::InvalidCredentials)` - Unknown login or wrong password
    /// - `Err(AuthError::LockedOut)` - Account is locked
    /// - `Err(AuthError::EmailNotConfirmed)` - Confirmation required but missing
    pub async fn login(&self, login: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let user_repo = UserRepository::new(self.db);
        let now = Utc::now();

        let Some(user) = user_repo.find_by_login(login).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        ensure_not_locked_out(&user, now)?;

        if !password::verify_password(password, &user.password_hash) {
            self.record_failure(&user, now).await?;
            return Err(AuthError::InvalidCredentials.into());
        }

        self.reset_failures(&user).await?;

        if self.settings.require_confirmed_email && !user.email_confirmed {
            return Err(AuthError::EmailNotConfirmed.into());
        }

        if user.two_factor_enabled {
            return Ok(LoginOutcome::TwoFactorRequired(user.id));
        }

        tracing::info!("User {} signed in", user.id);

        Ok(LoginOutcome::SignedIn(user))
    }

    /// Completes a pending sign-in with an authenticator code.
    ///
    /// # Arguments
    /// - `user_id` - The pending user from the session
    /// - `code` - Six-digit TOTP; spaces and dashes are ignored
    pub async fn login_with_2fa(&self, user_id: i32, code: &str) -> Result<User, AppError> {
        let now = Utc::now();
        let user = self.pending_user(user_id, now).await?;

        let Some(key) = user.authenticator_key.as_deref() else {
            return Err(AuthError::TwoFactorNotEnabled.into());
        };

        let valid = totp::verify_code(key, code, totp::unix_seconds(now))
            .map_err(|reason| InternalError::AuthenticatorKey { user_id, reason })?;

        if !valid {
            self.record_failure(&user, now).await?;
            return Err(AuthError::InvalidTwoFactorCode.into());
        }

        self.reset_failures(&user).await?;
        tracing::info!("User {} signed in with an authenticator code", user.id);

        Ok(user)
    }

    /// Completes a pending sign-in by consuming one recovery code.
    pub async fn login_with_recovery_code(
        &self,
        user_id: i32,
        recovery_code: &str,
    ) -> Result<User, AppError> {
        let now = Utc::now();
        let user = self.pending_user(user_id, now).await?;

        let code_hash = crypto::sha256_hex(&crypto::normalize_recovery_code(recovery_code));
        let consumed = RecoveryCodeRepository::new(self.db)
            .consume(user.id, &code_hash, now)
            .await?;

        if !consumed {
            self.record_failure(&user, now).await?;
            return Err(AuthError::InvalidRecoveryCode.into());
        }

        self.reset_failures(&user).await?;
        tracing::info!("User {} signed in with a recovery code", user.id);

        Ok(user)
    }

    /// Emails a password reset link if the address is registered.
    ///
    /// Always succeeds so the response does not reveal whether the account exists.
    pub async fn forgot_password(&self, email: &str) -> Result<(), AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_email(email.trim()).await? else {
            tracing::debug!("Password reset requested for unknown email");
            return Ok(());
        };

        let token = self.issue_token(user.id, TokenPurpose::PasswordReset).await?;
        let link = self.link(
            "reset-password",
            &[("email", user.email.clone()), ("token", token)],
        )?;

        self.email
            .send(
                &user.email,
                EmailTemplate::PasswordReset {
                    username: user.username.clone(),
                    link,
                },
            )
            .await?;

        Ok(())
    }

    /// Sets a new password using an emailed reset token.
    ///
    /// Clears any lockout and consumes every outstanding reset token for the user.
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced
    /// - `Err(AppError::ValidationErr)` - New password rejected
    /// - `Err(AuthError::InvalidToken)` - Unknown email, bad or expired token
    pub async fn reset_password(
        &self,
        email: &str,
        token: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let new_password = validate_password(new_password)?;
        let email = validate_email(email).map_err(|_| AuthError::InvalidToken)?;

        let user_repo = UserRepository::new(self.db);
        let token_repo = UserTokenRepository::new(self.db);

        let user = user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        token_repo
            .find_valid(
                user.id,
                TokenPurpose::PasswordReset,
                &crypto::sha256_hex(token.trim()),
                Utc::now(),
            )
            .await?
            .ok_or(AuthError::InvalidToken)?;

        let password_hash = password::hash_password(&new_password)?;
        user_repo.update_password(user.id, password_hash).await?;
        token_repo
            .delete_for_user(user.id, TokenPurpose::PasswordReset)
            .await?;

        tracing::info!("User {} reset their password", user.id);

        Ok(())
    }

    /// Loads the user owed a second factor, rejecting stale or locked sessions.
    async fn pending_user(&self, user_id: i32, now: DateTime<Utc>) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::TwoFactorNotPending)?;

        ensure_not_locked_out(&user, now)?;

        if !user.two_factor_enabled {
            return Err(AuthError::TwoFactorNotPending.into());
        }

        Ok(user)
    }

    /// Counts a failed attempt, locking the account once the limit is reached.
    async fn record_failure(&self, user: &User, now: DateTime<Utc>) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);
        let failed = user.access_failed_count + 1;

        if failed >= MAX_FAILED_ACCESS_ATTEMPTS {
            let lockout_end = now + Duration::minutes(LOCKOUT_DURATION_MINUTES);
            user_repo
                .record_failed_access(user.id, 0, Some(lockout_end))
                .await?;
            tracing::warn!("User {} locked out until {}", user.id, lockout_end);
        } else {
            user_repo.record_failed_access(user.id, failed, None).await?;
        }

        Ok(())
    }

    async fn reset_failures(&self, user: &User) -> Result<(), AppError> {
        if user.access_failed_count > 0 || user.lockout_end.is_some() {
            UserRepository::new(self.db)
                .reset_access_failed(user.id)
                .await?;
        }
        Ok(())
    }

    /// Stores the hash of a new random token, dropping older ones of the same purpose.
    ///
    /// # Returns
    /// The plaintext token to embed in the emailed link.
    async fn issue_token(&self, user_id: i32, purpose: TokenPurpose) -> Result<String, AppError> {
        let token_repo = UserTokenRepository::new(self.db);
        let token = crypto::generate_token();

        token_repo.delete_for_user(user_id, purpose).await?;
        token_repo
            .create(
                user_id,
                purpose,
                crypto::sha256_hex(&token),
                Utc::now() + purpose.lifetime(),
            )
            .await?;

        Ok(token)
    }

    fn link(&self, path: &str, params: &[(&str, String)]) -> Result<String, AppError> {
        let base = format!("{}/{}", self.settings.app_url.trim_end_matches('/'), path);
        let url = Url::parse_with_params(&base, params)
            .map_err(|e| AppError::InternalError(format!("Invalid APP_URL '{}': {}", base, e)))?;
        Ok(url.to_string())
    }
}

fn ensure_not_locked_out(user: &User, now: DateTime<Utc>) -> Result<(), AuthError> {
    match user.lockout_end {
        Some(end) if end > now => Err(AuthError::LockedOut(end)),
        _ => Ok(()),
    }
}

