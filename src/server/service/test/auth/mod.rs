use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use super::{last_link_token, settings, TEST_AUTHENTICATOR_KEY};
use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    service::{
        admin::code::AdminCodeService,
        auth::{AuthService, LoginOutcome, RegisterParams, MAX_FAILED_ACCESS_ATTEMPTS},
        email::{template::EmailTemplate, EmailService},
    },
    util::totp,
};

mod confirm_email;
mod register;
mod reset_password;

fn register_params(username: &str, email: &str) -> RegisterParams {
    RegisterParams {
        username: username.to_string(),
        email: email.to_string(),
        password: "Secret123".to_string(),
        admin_code: None,
    }
}
