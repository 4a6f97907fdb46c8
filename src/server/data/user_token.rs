//! Single-use email confirmation and password reset tokens.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::user::TokenPurpose;

pub struct UserTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserTokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores the hash of a newly issued token.
    ///
    /// # Arguments
    /// - `user_id` - Token owner
    /// - `purpose` - What the token may be used for
    /// - `token_hash` - Hex SHA-256 of the token emailed to the user
    /// - `expires_at` - Instant after which the token is rejected
    pub async fn create(
        &self,
        user_id: i32,
        purpose: TokenPurpose,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<entity::user_token::Model, DbErr> {
        entity::user_token::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            purpose: ActiveValue::Set(purpose.as_str().to_string()),
            token_hash: ActiveValue::Set(token_hash),
            expires_at: ActiveValue::Set(expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds an unexpired token matching user, purpose and hash.
    pub async fn find_valid(
        &self,
        user_id: i32,
        purpose: TokenPurpose,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<entity::user_token::Model>, DbErr> {
        entity::prelude::UserToken::find()
            .filter(entity::user_token::Column::UserId.eq(user_id))
            .filter(entity::user_token::Column::Purpose.eq(purpose.as_str()))
            .filter(entity::user_token::Column::TokenHash.eq(token_hash))
            .filter(entity::user_token::Column::ExpiresAt.gt(now))
            .one(self.db)
            .await
    }

    /// Deletes every token of the given purpose for a user.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of tokens removed
    pub async fn delete_for_user(&self, user_id: i32, purpose: TokenPurpose) -> Result<u64, DbErr> {
        let result = entity::prelude::UserToken::delete_many()
            .filter(entity::user_token::Column::UserId.eq(user_id))
            .filter(entity::user_token::Column::Purpose.eq(purpose.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes all tokens that expired at or before `now`.
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::UserToken::delete_many()
            .filter(entity::user_token::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
