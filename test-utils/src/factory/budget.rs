use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a monthly budget for the given user and month.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owning user
/// - `year` / `month` - Calendar month (month 1-12)
/// - `limit_cents` - Spending limit in cents
pub async fn create_budget(
    db: &DatabaseConnection,
    user_id: i32,
    year: i32,
    month: i32,
    limit_cents: i64,
) -> Result<entity::monthly_budget::Model, DbErr> {
    entity::monthly_budget::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        year: ActiveValue::Set(year),
        month: ActiveValue::Set(month),
        limit_cents: ActiveValue::Set(limit_cents),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
