//! Two-factor recovery codes, stored as SHA-256 hashes.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, TransactionTrait,
};

pub struct RecoveryCodeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecoveryCodeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Replaces all of a user's recovery codes with the given hashes.
    ///
    /// Runs in a transaction so a user never ends up with a partial set.
    pub async fn replace_all(&self, user_id: i32, code_hashes: Vec<String>) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::RecoveryCode::delete_many()
            .filter(entity::recovery_code::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        if !code_hashes.is_empty() {
            let models = code_hashes
                .into_iter()
                .map(|code_hash| entity::recovery_code::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    code_hash: ActiveValue::Set(code_hash),
                    used_at: ActiveValue::Set(None),
                    ..Default::default()
                });

            entity::prelude::RecoveryCode::insert_many(models)
                .exec(&txn)
                .await?;
        }

        txn.commit().await
    }

    /// Counts recovery codes that have not been used yet.
    pub async fn count_unused(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::RecoveryCode::find()
            .filter(entity::recovery_code::Column::UserId.eq(user_id))
            .filter(entity::recovery_code::Column::UsedAt.is_null())
            .count(self.db)
            .await
    }

    /// Marks a matching unused code as used.
    ///
    /// # Returns
    /// - `Ok(true)` - A code matched and was consumed
    /// - `Ok(false)` - No unused code with that hash
    pub async fn consume(
        &self,
        user_id: i32,
        code_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::RecoveryCode::update_many()
            .filter(entity::recovery_code::Column::UserId.eq(user_id))
            .filter(entity::recovery_code::Column::CodeHash.eq(code_hash))
            .filter(entity::recovery_code::Column::UsedAt.is_null())
            .col_expr(entity::recovery_code::Column::UsedAt, Expr::value(Some(now)))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
