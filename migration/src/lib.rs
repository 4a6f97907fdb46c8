pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_user_token_table;
mod m20260301_000003_create_recovery_code_table;
mod m20260302_000004_create_store_table;
mod m20260302_000005_create_product_table;
mod m20260302_000006_create_price_table;
mod m20260302_000007_create_tracked_product_table;
mod m20260303_000008_create_expense_table;
mod m20260303_000009_create_monthly_budget_table;
mod m20260304_000010_create_todo_item_table;
mod m20260304_000011_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_user_token_table::Migration),
            Box::new(m20260301_000003_create_recovery_code_table::Migration),
            Box::new(m20260302_000004_create_store_table::Migration),
            Box::new(m20260302_000005_create_product_table::Migration),
            Box::new(m20260302_000006_create_price_table::Migration),
            Box::new(m20260302_000007_create_tracked_product_table::Migration),
            Box::new(m20260303_000008_create_expense_table::Migration),
            Box::new(m20260303_000009_create_monthly_budget_table::Migration),
            Box::new(m20260304_000010_create_todo_item_table::Migration),
            Box::new(m20260304_000011_create_notification_table::Migration),
        ]
    }
}
