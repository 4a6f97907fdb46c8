use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User, m20260302_000005_create_product_table::Product,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrackedProduct::Table)
                    .if_not_exists()
                    .col(pk_auto(TrackedProduct::Id))
                    .col(integer(TrackedProduct::UserId))
                    .col(integer(TrackedProduct::ProductId))
                    .col(big_integer_null(TrackedProduct::TargetPriceCents))
                    .col(
                        timestamp_with_time_zone(TrackedProduct::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tracked_product_user_id")
                            .from(TrackedProduct::Table, TrackedProduct::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tracked_product_product_id")
                            .from(TrackedProduct::Table, TrackedProduct::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tracked_product_user_product")
                    .table(TrackedProduct::Table)
                    .col(TrackedProduct::UserId)
                    .col(TrackedProduct::ProductId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrackedProduct::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TrackedProduct {
    Table,
    Id,
    UserId,
    ProductId,
    TargetPriceCents,
    CreatedAt,
}
