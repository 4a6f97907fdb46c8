use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MonthlyBudget::Table)
                    .if_not_exists()
                    .col(pk_auto(MonthlyBudget::Id))
                    .col(integer(MonthlyBudget::UserId))
                    .col(integer(MonthlyBudget::Year))
                    .col(integer(MonthlyBudget::Month))
                    .col(big_integer(MonthlyBudget::LimitCents))
                    .col(
                        timestamp_with_time_zone(MonthlyBudget::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_monthly_budget_user_id")
                            .from(MonthlyBudget::Table, MonthlyBudget::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_monthly_budget_user_year_month")
                    .table(MonthlyBudget::Table)
                    .col(MonthlyBudget::UserId)
                    .col(MonthlyBudget::Year)
                    .col(MonthlyBudget::Month)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MonthlyBudget::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MonthlyBudget {
    Table,
    Id,
    UserId,
    Year,
    Month,
    LimitCents,
    CreatedAt,
}
