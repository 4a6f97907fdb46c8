//! Price observation and product tracking models.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::price::{PriceDto, TrackedProductDto},
    server::util::money,
};

/// A recorded price, joined with the store's name for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Price {
    pub id: i32,
    pub product_id: i32,
    pub store_id: i32,
    pub store_name: String,
    pub amount_cents: i64,
    pub recorded_on: NaiveDate,
}

impl Price {
    pub fn into_dto(self) -> PriceDto {
        PriceDto {
            id: self.id,
            product_id: self.product_id,
            store_id: self.store_id,
            store_name: self.store_name,
            amount: money::from_cents(self.amount_cents),
            recorded_on: self.recorded_on,
        }
    }

    /// Converts a price entity and its (optional) loaded store.
    pub fn from_entity(
        entity: entity::price::Model,
        store: Option<entity::store::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            product_id: entity.product_id,
            store_id: entity.store_id,
            store_name: store.map(|s| s.name).unwrap_or_default(),
            amount_cents: entity.amount_cents,
            recorded_on: entity.recorded_on,
        }
    }
}

/// Validated price observation.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceParams {
    pub product_id: i32,
    pub store_id: i32,
    pub amount_cents: i64,
    pub recorded_on: NaiveDate,
}

/// Inclusive date window for price history.
#[derive(Debug, Clone, Default)]
pub struct PriceHistoryQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// A product the user tracks, with the lowest current price across stores.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedProduct {
    pub product_id: i32,
    pub product_name: String,
    pub target_price_cents: Option<i64>,
    pub lowest_price_cents: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl TrackedProduct {
    pub fn into_dto(self) -> TrackedProductDto {
        TrackedProductDto {
            product_id: self.product_id,
            product_name: self.product_name,
            target_price: self.target_price_cents.map(money::from_cents),
            lowest_price: self.lowest_price_cents.map(money::from_cents),
            created_at: self.created_at,
        }
    }
}
