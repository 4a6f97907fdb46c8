//! Reference data seeding.
//!
//! A `SeedProvider` produces `SeedData` whose stores and products have already passed
//! through their builders. The `Seeder` writes it in one transaction, skipping anything
//! that already exists so repeated runs are harmless.

pub mod provider;
pub mod seeder;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::server::{
    error::seed::SeedError,
    model::catalog::{ProductParams, StoreParams},
    validation::catalog::{ProductBuilder, StoreBuilder},
};

/// Validated catalog ready to be written by the seeder.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub stores: Vec<StoreParams>,
    pub products: Vec<ProductParams>,
    pub prices: Vec<SeedPrice>,
}

/// Price observation referencing its product and store by name.
///
/// Names are resolved and the amount validated when the seeder runs, since ids are
/// only known once stores and products exist.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedPrice {
    pub product: String,
    pub store: String,
    pub amount: Decimal,
    #[serde(default)]
    pub recorded_on: Option<NaiveDate>,
}

/// Raw seed document, as read from JSON or written out by the hardcoded provider.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedDocument {
    #[serde(default)]
    pub stores: Vec<SeedStore>,
    #[serde(default)]
    pub products: Vec<SeedProduct>,
    #[serde(default)]
    pub prices: Vec<SeedPrice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedStore {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedProduct {
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl SeedDocument {
    /// Runs every store and product record through its builder.
    ///
    /// # Returns
    /// - `Ok(SeedData)` - All records valid
    /// - `Err(SeedError::InvalidRecord)` - First record that failed validation
    pub fn validate(self) -> Result<SeedData, SeedError> {
        let stores = self
            .stores
            .into_iter()
            .enumerate()
            .map(|(index, store)| {
                StoreBuilder::new()
                    .name(store.name)
                    .address(store.address)
                    .website(store.website)
                    .build()
                    .map_err(|source| SeedError::InvalidRecord {
                        record: "store",
                        index,
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let products = self
            .products
            .into_iter()
            .enumerate()
            .map(|(index, product)| {
                ProductBuilder::new()
                    .name(product.name)
                    .brand(product.brand)
                    .category(product.category)
                    .description(product.description)
                    .build()
                    .map_err(|source| SeedError::InvalidRecord {
                        record: "product",
                        index,
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SeedData {
            stores,
            products,
            prices: self.prices,
        })
    }
}
