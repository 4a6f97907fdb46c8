use chrono::Utc;
use test_utils::{builder::TestBuilder, factory};

use super::{settings, TEST_AUTHENTICATOR_KEY};
use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::{
        email::{template::EmailTemplate, EmailService},
        two_factor::{TwoFactorService, RECOVERY_CODE_COUNT},
    },
    util::totp,
};

mod enable;

async fn reload(db: &sea_orm::DatabaseConnection, user_id: i32) -> Result<User, AppError> {
    UserRepository::new(db)
        .find_by_id(user_id)
        .await?
        .ok_or(AppError::NotFound("User not found".to_string()))
}
