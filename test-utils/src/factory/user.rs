//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Placeholder stored when no password is requested; never verifies.
const UNUSABLE_PASSWORD_HASH: &str = "!unusable";

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .username("alice")
///     .password("Secret123")
///     .two_factor("JBSWY3DPEHPK3PXPJBSWY3DPEHPK3PXP")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    email: String,
    password: Option<String>,
    email_confirmed: bool,
    admin: bool,
    authenticator_key: Option<String>,
    two_factor_enabled: bool,
    access_failed_count: i32,
    lockout_end: Option<DateTime<Utc>>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user{id}"`, email: `"user{id}@example.com"`
    /// - no usable password, email confirmed, not admin, 2FA disabled
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user{}", id),
            email: format!("user{}@example.com", id),
            password: None,
            email_confirmed: true,
            admin: false,
            authenticator_key: None,
            two_factor_enabled: false,
            access_failed_count: 0,
            lockout_end: None,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets a plain-text password that is hashed with Argon2 on `build()`.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn email_confirmed(mut self, confirmed: bool) -> Self {
        self.email_confirmed = confirmed;
        self
    }

    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    /// Stores the base32 authenticator key and enables two-factor authentication.
    pub fn two_factor(mut self, authenticator_key: impl Into<String>) -> Self {
        self.authenticator_key = Some(authenticator_key.into());
        self.two_factor_enabled = true;
        self
    }

    pub fn locked_until(mut self, lockout_end: DateTime<Utc>) -> Self {
        self.lockout_end = Some(lockout_end);
        self
    }

    pub fn access_failed_count(mut self, count: i32) -> Self {
        self.access_failed_count = count;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert or password hashing failure
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let password_hash = match self.password {
            Some(password) => hash_password(&password)?,
            None => UNUSABLE_PASSWORD_HASH.to_string(),
        };

        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(password_hash),
            email_confirmed: ActiveValue::Set(self.email_confirmed),
            admin: ActiveValue::Set(self.admin),
            two_factor_enabled: ActiveValue::Set(self.two_factor_enabled),
            authenticator_key: ActiveValue::Set(self.authenticator_key),
            access_failed_count: ActiveValue::Set(self.access_failed_count),
            lockout_end: ActiveValue::Set(self.lockout_end),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

fn hash_password(password: &str) -> Result<String, DbErr> {
    let salt = SaltString::encode_b64(b"pricebook-test-salt")
        .map_err(|e| DbErr::Custom(e.to_string()))?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DbErr::Custom(e.to_string()))
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a confirmed user who can log in with the given password.
pub async fn create_user_with_password(
    db: &DatabaseConnection,
    password: &str,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).password(password).build().await
}
