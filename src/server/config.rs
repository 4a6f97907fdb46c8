use std::{path::PathBuf, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_URL: &str = "http://localhost:8080";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_TWO_FACTOR_ISSUER: &str = "Pricebook";
const DEFAULT_TODO_REMINDER_LEAD_MINUTES: i64 = 60;
/// One week.
const MAX_TODO_REMINDER_LEAD_MINUTES: i64 = 7 * 24 * 60;

pub struct Config {
    pub database_url: String,
    pub app_url: String,
    pub bind_address: String,

    /// `None` when `SMTP_HOST` is unset; mail is then logged instead of sent.
    pub smtp: Option<SmtpConfig>,
    pub seed_source: SeedSource,
    pub log_file: Option<PathBuf>,

    pub auth: AuthSettings,
    pub todo_reminder_lead_minutes: i64,
}

/// SMTP relay settings for outgoing mail.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from: String,
}

/// Settings read by the authentication services on every request.
#[derive(Debug, Clone)]
pub struct AuthSettings {
    /// Base URL used to build links in confirmation and reset emails.
    pub app_url: String,
    pub require_confirmed_email: bool,
    /// Issuer name shown by authenticator apps.
    pub two_factor_issuer: String,
}

/// Where startup seeding takes its catalog from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    None,
    Hardcoded,
    Json(PathBuf),
}

impl SeedSource {
    fn parse(value: &str) -> Self {
        match value.trim() {
            "" | "none" => Self::None,
            "hardcoded" => Self::Hardcoded,
            path => Self::Json(PathBuf::from(path)),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let app_url = optional_var("APP_URL").unwrap_or_else(|| DEFAULT_APP_URL.to_string());

        let smtp = match optional_var("SMTP_HOST") {
            Some(host) => Some(SmtpConfig {
                host,
                port: parse_var("SMTP_PORT", DEFAULT_SMTP_PORT)?,
                username: required_var("SMTP_USERNAME")?,
                password: required_var("SMTP_PASSWORD")?,
                from: required_var("SMTP_FROM")?,
            }),
            None => None,
        };

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            bind_address: optional_var("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            smtp,
            seed_source: optional_var("SEED_SOURCE")
                .map(|value| SeedSource::parse(&value))
                .unwrap_or(SeedSource::None),
            log_file: optional_var("LOG_FILE").map(PathBuf::from),
            auth: AuthSettings {
                app_url: app_url.clone(),
                require_confirmed_email: parse_var("REQUIRE_CONFIRMED_EMAIL", true)?,
                two_factor_issuer: optional_var("TWO_FACTOR_ISSUER")
                    .unwrap_or_else(|| DEFAULT_TWO_FACTOR_ISSUER.to_string()),
            },
            todo_reminder_lead_minutes: parse_lead_minutes("TODO_REMINDER_LEAD_MINUTES")?,
            app_url,
        })
    }
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    optional_var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match optional_var(name) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

/// Reads a reminder lead time in minutes, rejecting values outside `0..=MAX_TODO_REMINDER_LEAD_MINUTES`.
fn parse_lead_minutes(name: &str) -> Result<i64, ConfigError> {
    let minutes = parse_var(name, DEFAULT_TODO_REMINDER_LEAD_MINUTES)?;

    if !(0..=MAX_TODO_REMINDER_LEAD_MINUTES).contains(&minutes) {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: minutes.to_string(),
        });
    }

    Ok(minutes)
}
