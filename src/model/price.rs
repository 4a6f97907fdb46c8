use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PriceDto {
    pub id: i32,
    pub product_id: i32,
    pub store_id: i32,
    pub store_name: String,
    #[schema(value_type = String, example = "1.99")]
    pub amount: Decimal,
    pub recorded_on: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecordPriceDto {
    pub product_id: i32,
    pub store_id: i32,
    #[schema(value_type = String, example = "1.99")]
    pub amount: Decimal,
    /// Defaults to today (UTC).
    #[serde(default)]
    pub recorded_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrackedProductDto {
    pub product_id: i32,
    pub product_name: String,
    #[schema(value_type = Option<String>)]
    pub target_price: Option<Decimal>,
    #[schema(value_type = Option<String>)]
    pub lowest_price: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct TrackProductDto {
    /// Alert when a price at or below this amount is recorded.
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub target_price: Option<Decimal>,
}
