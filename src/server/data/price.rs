//! Price observation repository.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    catalog::StorePrice,
    price::{Price, PriceHistoryQuery, PriceParams},
};

/// Repository providing database operations for recorded prices.
pub struct PriceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PriceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a price observation.
    ///
    /// # Returns
    /// - `Ok(Price)` - Created price including the store name
    /// - `Err(DbErr)` - Database error, including a unique violation on
    ///   (product, store, date) if the caller skipped `exists`
    pub async fn create(&self, params: PriceParams) -> Result<Price, DbErr> {
        let entity = entity::price::ActiveModel {
            product_id: ActiveValue::Set(params.product_id),
            store_id: ActiveValue::Set(params.store_id),
            amount_cents: ActiveValue::Set(params.amount_cents),
            recorded_on: ActiveValue::Set(params.recorded_on),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let store = entity::prelude::Store::find_by_id(entity.store_id)
            .one(self.db)
            .await?;

        Ok(Price::from_entity(entity, store))
    }

    /// Checks whether a price is already recorded for product, store and date.
    pub async fn exists(
        &self,
        product_id: i32,
        store_id: i32,
        recorded_on: NaiveDate,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Price::find()
            .filter(entity::price::Column::ProductId.eq(product_id))
            .filter(entity::price::Column::StoreId.eq(store_id))
            .filter(entity::price::Column::RecordedOn.eq(recorded_on))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Price>, DbErr> {
        let result = entity::prelude::Price::find_by_id(id)
            .find_also_related(entity::prelude::Store)
            .one(self.db)
            .await?;

        Ok(result.map(|(price, store)| Price::from_entity(price, store)))
    }

    /// Gets a product's price history within an optional inclusive date window,
    /// ordered by date then store name.
    pub async fn get_history(
        &self,
        product_id: i32,
        query: &PriceHistoryQuery,
    ) -> Result<Vec<Price>, DbErr> {
        let mut select = entity::prelude::Price::find()
            .filter(entity::price::Column::ProductId.eq(product_id));

        if let Some(from) = query.from {
            select = select.filter(entity::price::Column::RecordedOn.gte(from));
        }
        if let Some(to) = query.to {
            select = select.filter(entity::price::Column::RecordedOn.lte(to));
        }

        let rows = select
            .find_also_related(entity::prelude::Store)
            .order_by_asc(entity::price::Column::RecordedOn)
            .order_by_asc(entity::store::Column::Name)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(price, store)| Price::from_entity(price, store))
            .collect())
    }

    /// Gets the most recent price at each store for a product, cheapest first.
    pub async fn latest_per_store(&self, product_id: i32) -> Result<Vec<StorePrice>, DbErr> {
        let rows = entity::prelude::Price::find()
            .filter(entity::price::Column::ProductId.eq(product_id))
            .find_also_related(entity::prelude::Store)
            .order_by_desc(entity::price::Column::RecordedOn)
            .order_by_desc(entity::price::Column::Id)
            .all(self.db)
            .await?;

        let mut latest: Vec<StorePrice> = Vec::new();
        for (price, store) in rows {
            if latest.iter().any(|p| p.store_id == price.store_id) {
                continue;
            }
            latest.push(StorePrice {
                store_id: price.store_id,
                store_name: store.map(|s| s.name).unwrap_or_default(),
                amount_cents: price.amount_cents,
                recorded_on: price.recorded_on,
            });
        }

        latest.sort_by(|a, b| {
            a.amount_cents
                .cmp(&b.amount_cents)
                .then_with(|| a.store_name.cmp(&b.store_name))
        });

        Ok(latest)
    }

    /// Counts prices recorded at a store.
    pub async fn count_for_store(&self, store_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Price::find()
            .filter(entity::price::Column::StoreId.eq(store_id))
            .count(self.db)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Price::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
