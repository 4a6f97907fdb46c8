//! User domain models and parameters.
//!
//! The `User` model carries the credential and lockout state needed by the
//! authentication services. None of the secret fields leave the server: `into_dto`
//! only exposes profile and status flags.

use chrono::{DateTime, Utc};

use crate::model::user::{PaginatedUsersDto, UserDto};

/// Registered user with credentials, two-factor and lockout state.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// Argon2id PHC string.
    pub password_hash: String,
    pub email_confirmed: bool,
    pub admin: bool,
    pub two_factor_enabled: bool,
    /// Base32 TOTP key, kept when 2FA is disabled so the authenticator keeps working.
    pub authenticator_key: Option<String>,
    /// Consecutive failed sign-in attempts since the last success or lockout.
    pub access_failed_count: i32,
    pub lockout_end: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Returns true while a lockout is in effect at `now`.
    pub fn is_locked_out(&self, now: DateTime<Utc>) -> bool {
        self.lockout_end.is_some_and(|end| end > now)
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            email_confirmed: self.email_confirmed,
            admin: self.admin,
            two_factor_enabled: self.two_factor_enabled,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
            email_confirmed: entity.email_confirmed,
            admin: entity.admin,
            two_factor_enabled: entity.two_factor_enabled,
            authenticator_key: entity.authenticator_key,
            access_failed_count: entity.access_failed_count,
            lockout_end: entity.lockout_end,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for inserting a new user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub admin: bool,
    pub email_confirmed: bool,
}

/// Purpose of a single-use emailed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPurpose {
    EmailConfirmation,
    PasswordReset,
}

impl TokenPurpose {
    /// Value stored in the `user_token.purpose` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmailConfirmation => "email_confirmation",
            Self::PasswordReset => "password_reset",
        }
    }

    /// How long a freshly issued token stays valid.
    pub fn lifetime(self) -> chrono::Duration {
        match self {
            Self::EmailConfirmation => chrono::Duration::hours(24),
            Self::PasswordReset => chrono::Duration::hours(1),
        }
    }
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
