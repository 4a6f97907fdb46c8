//! Per-user product tracking with optional target prices.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct TrackedProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrackedProductRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Starts tracking a product or updates the target of an existing entry.
    ///
    /// # Arguments
    /// - `user_id` - Tracking user
    /// - `product_id` - Product to track
    /// - `target_price_cents` - Alert threshold, `None` to track without alerts
    pub async fn upsert(
        &self,
        user_id: i32,
        product_id: i32,
        target_price_cents: Option<i64>,
    ) -> Result<entity::tracked_product::Model, DbErr> {
        let existing = entity::prelude::TrackedProduct::find()
            .filter(entity::tracked_product::Column::UserId.eq(user_id))
            .filter(entity::tracked_product::Column::ProductId.eq(product_id))
            .one(self.db)
            .await?;

        match existing {
            Some(model) => {
                let mut active: entity::tracked_product::ActiveModel = model.into();
                active.target_price_cents = ActiveValue::Set(target_price_cents);
                active.update(self.db).await
            }
            None => {
                entity::tracked_product::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    product_id: ActiveValue::Set(product_id),
                    target_price_cents: ActiveValue::Set(target_price_cents),
                    created_at: ActiveValue::Set(Utc::now()),
                    ..Default::default()
                }
                .insert(self.db)
                .await
            }
        }
    }

    /// Stops tracking. Returns false when the product was not tracked.
    pub async fn delete(&self, user_id: i32, product_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::TrackedProduct::delete_many()
            .filter(entity::tracked_product::Column::UserId.eq(user_id))
            .filter(entity::tracked_product::Column::ProductId.eq(product_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets a user's tracked products with the product rows, oldest first.
    pub async fn get_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::tracked_product::Model, entity::product::Model)>, DbErr> {
        let rows = entity::prelude::TrackedProduct::find()
            .filter(entity::tracked_product::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Product)
            .order_by_asc(entity::tracked_product::Column::CreatedAt)
            .order_by_asc(entity::tracked_product::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(tracked, product)| product.map(|p| (tracked, p)))
            .collect())
    }

    /// Finds users whose target price for the product is at or above `amount_cents`.
    pub async fn find_alert_targets(
        &self,
        product_id: i32,
        amount_cents: i64,
    ) -> Result<Vec<entity::tracked_product::Model>, DbErr> {
        entity::prelude::TrackedProduct::find()
            .filter(entity::tracked_product::Column::ProductId.eq(product_id))
            .filter(entity::tracked_product::Column::TargetPriceCents.gte(amount_cents))
            .all(self.db)
            .await
    }
}
