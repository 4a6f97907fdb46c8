//! Username, email and password rules for registration and account changes.

use crate::server::error::validation::ValidationError;

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 32;
const EMAIL_MAX: usize = 254;
const PASSWORD_MIN: usize = 8;
/// Argon2 accepts longer input but nobody types this much into a login form.
const PASSWORD_MAX: usize = 128;

/// Validated registration credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    /// Lowercased email address.
    pub email: String,
    pub password: String,
}

/// Builder validating a full set of registration credentials.
#[derive(Default)]
pub struct CredentialsBuilder {
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

impl CredentialsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Validates every field, reporting the first failure in field order.
    pub fn build(self) -> Result<Credentials, ValidationError> {
        let username = validate_username(self.username.as_deref().unwrap_or_default())?;
        let email = validate_email(self.email.as_deref().unwrap_or_default())?;
        let password = validate_password(self.password.as_deref().unwrap_or_default())?;

        Ok(Credentials {
            username,
            email,
            password,
        })
    }
}

/// Checks username length and the `[A-Za-z0-9_.-]` character set.
pub fn validate_username(username: &str) -> Result<String, ValidationError> {
    let username = username.trim();
    let len = username.chars().count();

    if len < USERNAME_MIN || len > USERNAME_MAX {
        return Err(ValidationError::new(
            "username",
            format!(
                "username must be between {} and {} characters",
                USERNAME_MIN, USERNAME_MAX
            ),
        ));
    }

    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        return Err(ValidationError::new(
            "username",
            "username may only contain letters, digits, '_', '.' and '-'",
        ));
    }

    Ok(username.to_string())
}

/// Checks the address has the shape `local@domain.tld` and returns it lowercased.
pub fn validate_email(email: &str) -> Result<String, ValidationError> {
    let email = email.trim().to_lowercase();

    if email.is_empty() {
        return Err(ValidationError::new("email", "email is required"));
    }
    if email.chars().count() > EMAIL_MAX {
        return Err(ValidationError::new(
            "email",
            format!("email must be at most {} characters", EMAIL_MAX),
        ));
    }

    let invalid = || ValidationError::new("email", "email is not a valid address");

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(invalid());
    };
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(invalid());
    }

    Ok(email)
}

/// Checks password length and that it mixes a digit, a lowercase and an uppercase letter.
pub fn validate_password(password: &str) -> Result<String, ValidationError> {
    let len = password.chars().count();

    if len < PASSWORD_MIN || len > PASSWORD_MAX {
        return Err(ValidationError::new(
            "password",
            format!(
                "password must be between {} and {} characters",
                PASSWORD_MIN, PASSWORD_MAX
            ),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new(
            "password",
            "password must contain at least one digit",
        ));
    }
    if !password.chars().any(char::is_lowercase) {
        return Err(ValidationError::new(
            "password",
            "password must contain at least one lowercase letter",
        ));
    }
    if !password.chars().any(char::is_uppercase) {
        return Err(ValidationError::new(
            "password",
            "password must contain at least one uppercase letter",
        ));
    }

    Ok(password.to_string())
}
