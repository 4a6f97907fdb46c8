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
                    .table(TodoItem::Table)
                    .if_not_exists()
                    .col(pk_auto(TodoItem::Id))
                    .col(integer(TodoItem::UserId))
                    .col(string(TodoItem::Title))
                    .col(text_null(TodoItem::Description))
                    .col(timestamp_with_time_zone_null(TodoItem::DueAt))
                    .col(boolean(TodoItem::Completed).default(false))
                    .col(timestamp_with_time_zone_null(TodoItem::CompletedAt))
                    .col(boolean(TodoItem::ReminderSent).default(false))
                    .col(
                        timestamp_with_time_zone(TodoItem::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_todo_item_user_id")
                            .from(TodoItem::Table, TodoItem::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TodoItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TodoItem {
    Table,
    Id,
    UserId,
    Title,
    Description,
    DueAt,
    Completed,
    CompletedAt,
    ReminderSent,
    CreatedAt,
}
