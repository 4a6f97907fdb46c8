use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260302_000004_create_store_table::Store, m20260302_000005_create_product_table::Product,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Price::Table)
                    .if_not_exists()
                    .col(pk_auto(Price::Id))
                    .col(integer(Price::ProductId))
                    .col(integer(Price::StoreId))
                    .col(big_integer(Price::AmountCents))
                    .col(date(Price::RecordedOn))
                    .col(
                        timestamp_with_time_zone(Price::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_price_product_id")
                            .from(Price::Table, Price::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_price_store_id")
                            .from(Price::Table, Price::StoreId)
                            .to(Store::Table, Store::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_price_product_store_date")
                    .table(Price::Table)
                    .col(Price::ProductId)
                    .col(Price::StoreId)
                    .col(Price::RecordedOn)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Price::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Price {
    Table,
    Id,
    ProductId,
    StoreId,
    AmountCents,
    RecordedOn,
    CreatedAt,
}
