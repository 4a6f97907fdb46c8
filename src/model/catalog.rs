use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StoreDto {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body for creating or replacing a store.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveStoreDto {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub brand: Option<String>,
    pub category: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body for creating or replacing a product.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveProductDto {
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedProductsDto {
    pub products: Vec<ProductDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Most recent price of a product at one store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StorePriceDto {
    pub store_id: i32,
    pub store_name: String,
    #[schema(value_type = String, example = "1.99")]
    pub amount: Decimal,
    pub recorded_on: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductDetailDto {
    pub product: ProductDto,
    /// Latest price per store, cheapest first.
    pub prices: Vec<StorePriceDto>,
    pub lowest_price: Option<StorePriceDto>,
}
