use test_utils::{builder::TestBuilder, factory};

use super::settings;
use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::{account::AccountService, email::EmailService},
    util::password,
};

mod change_email;
mod change_password;
mod delete_account;

async fn create_user(db: &sea_orm::DatabaseConnection, email: &str) -> Result<User, AppError> {
    let entity = factory::user::UserFactory::new(db)
        .email(email)
        .password("Secret123")
        .build()
        .await?;
    Ok(User::from_entity(entity))
}
