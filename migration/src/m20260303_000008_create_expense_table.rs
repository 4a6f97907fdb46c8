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
                    .table(Expense::Table)
                    .if_not_exists()
                    .col(pk_auto(Expense::Id))
                    .col(integer(Expense::UserId))
                    .col(string(Expense::Description))
                    .col(string(Expense::Category))
                    .col(big_integer(Expense::AmountCents))
                    .col(date(Expense::SpentOn))
                    .col(
                        timestamp_with_time_zone(Expense::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_expense_user_id")
                            .from(Expense::Table, Expense::UserId)
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
                    .name("idx_expense_user_spent_on")
                    .table(Expense::Table)
                    .col(Expense::UserId)
                    .col(Expense::SpentOn)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Expense::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Expense {
    Table,
    Id,
    UserId,
    Description,
    Category,
    AmountCents,
    SpentOn,
    CreatedAt,
}
