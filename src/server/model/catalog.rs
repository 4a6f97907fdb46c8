//! Store and product domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::catalog::{
        PaginatedProductsDto, ProductDetailDto, ProductDto, StoreDto, StorePriceDto,
    },
    server::util::money,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Store {
    pub fn into_dto(self) -> StoreDto {
        StoreDto {
            id: self.id,
            name: self.name,
            address: self.address,
            website: self.website,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::store::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            website: entity.website,
            created_at: entity.created_at,
        }
    }
}

/// Validated store fields for create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreParams {
    pub name: String,
    pub address: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub brand: Option<String>,
    pub category: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            name: self.name,
            brand: self.brand,
            category: self.category,
            description: self.description,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::product::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            brand: entity.brand,
            category: entity.category,
            description: entity.description,
            created_at: entity.created_at,
        }
    }
}

/// Validated product fields for create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductParams {
    pub name: String,
    pub brand: Option<String>,
    pub category: String,
    pub description: Option<String>,
}

/// Filters and paging for the product listing.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    /// Case-insensitive substring matched against the product name.
    pub search: Option<String>,
    /// Exact category match.
    pub category: Option<String>,
    /// Zero-indexed page number.
    pub page: u64,
    pub per_page: u64,
}

#[derive(Debug, Clone)]
pub struct PaginatedProducts {
    pub products: Vec<Product>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedProducts {
    pub fn into_dto(self) -> PaginatedProductsDto {
        PaginatedProductsDto {
            products: self.products.into_iter().map(Product::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Latest observed price of a product at one store.
#[derive(Debug, Clone, PartialEq)]
pub struct StorePrice {
    pub store_id: i32,
    pub store_name: String,
    pub amount_cents: i64,
    pub recorded_on: NaiveDate,
}

impl StorePrice {
    pub fn into_dto(self) -> StorePriceDto {
        StorePriceDto {
            store_id: self.store_id,
            store_name: self.store_name,
            amount: money::from_cents(self.amount_cents),
            recorded_on: self.recorded_on,
        }
    }
}

/// Product with its current price at every store that has one.
#[derive(Debug, Clone)]
pub struct ProductDetail {
    pub product: Product,
    /// Sorted cheapest first, ties broken by store name.
    pub prices: Vec<StorePrice>,
}

impl ProductDetail {
    /// The cheapest current price, if any store has recorded one.
    pub fn lowest_price(&self) -> Option<&StorePrice> {
        self.prices.first()
    }

    pub fn into_dto(self) -> ProductDetailDto {
        let lowest_price = self.lowest_price().cloned().map(StorePrice::into_dto);

        ProductDetailDto {
            product: self.product.into_dto(),
            prices: self.prices.into_iter().map(StorePrice::into_dto).collect(),
            lowest_price,
        }
    }
}
