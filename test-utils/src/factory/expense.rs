use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating expenses owned by a user.
pub struct ExpenseFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    description: String,
    category: String,
    amount_cents: i64,
    spent_on: NaiveDate,
}

impl<'a> ExpenseFactory<'a> {
    /// Defaults: 10.00 for "Lunch" in category "Food", spent today (UTC).
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            description: "Lunch".to_string(),
            category: "Food".to_string(),
            amount_cents: 1000,
            spent_on: Utc::now().date_naive(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn amount_cents(mut self, amount_cents: i64) -> Self {
        self.amount_cents = amount_cents;
        self
    }

    pub fn spent_on(mut self, spent_on: NaiveDate) -> Self {
        self.spent_on = spent_on;
        self
    }

    pub async fn build(self) -> Result<entity::expense::Model, DbErr> {
        entity::expense::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            description: ActiveValue::Set(self.description),
            category: ActiveValue::Set(self.category),
            amount_cents: ActiveValue::Set(self.amount_cents),
            spent_on: ActiveValue::Set(self.spent_on),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_expense(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::expense::Model, DbErr> {
    ExpenseFactory::new(db, user_id).build().await
}
