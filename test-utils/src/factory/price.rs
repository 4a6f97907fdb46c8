use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating price observations.
pub struct PriceFactory<'a> {
    db: &'a DatabaseConnection,
    product_id: i32,
    store_id: i32,
    amount_cents: i64,
    recorded_on: NaiveDate,
}

impl<'a> PriceFactory<'a> {
    /// Defaults: 1.99 recorded today (UTC).
    pub fn new(db: &'a DatabaseConnection, product_id: i32, store_id: i32) -> Self {
        Self {
            db,
            product_id,
            store_id,
            amount_cents: 199,
            recorded_on: Utc::now().date_naive(),
        }
    }

    pub fn amount_cents(mut self, amount_cents: i64) -> Self {
        self.amount_cents = amount_cents;
        self
    }

    pub fn recorded_on(mut self, recorded_on: NaiveDate) -> Self {
        self.recorded_on = recorded_on;
        self
    }

    pub async fn build(self) -> Result<entity::price::Model, DbErr> {
        entity::price::ActiveModel {
            product_id: ActiveValue::Set(self.product_id),
            store_id: ActiveValue::Set(self.store_id),
            amount_cents: ActiveValue::Set(self.amount_cents),
            recorded_on: ActiveValue::Set(self.recorded_on),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_price(
    db: &DatabaseConnection,
    product_id: i32,
    store_id: i32,
) -> Result<entity::price::Model, DbErr> {
    PriceFactory::new(db, product_id, store_id).build().await
}
