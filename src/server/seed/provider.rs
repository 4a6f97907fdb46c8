use std::path::PathBuf;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::server::{
    error::seed::SeedError,
    seed::{SeedData, SeedDocument, SeedPrice, SeedProduct, SeedStore},
};

/// Source of seed data.
pub trait SeedProvider {
    /// Human-readable name of the source, used in logs.
    fn name(&self) -> String;

    fn load(&self) -> Result<SeedData, SeedError>;
}

/// Small built-in catalog for trying the application out.
pub struct HardcodedSeedProvider;

impl SeedProvider for HardcodedSeedProvider {
    fn name(&self) -> String {
        "built-in catalog".to_string()
    }

    fn load(&self) -> Result<SeedData, SeedError> {
        hardcoded_document().validate()
    }
}

/// Reads a seed document from a JSON file.
pub struct JsonSeedProvider {
    pub path: PathBuf,
}

impl JsonSeedProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SeedProvider for JsonSeedProvider {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<SeedData, SeedError> {
        let path = self.path.display().to_string();

        let data = std::fs::read_to_string(&self.path).map_err(|source| SeedError::Read {
            path: path.clone(),
            source,
        })?;

        let document: SeedDocument =
            serde_json::from_str(&data).map_err(|source| SeedError::Parse { path, source })?;

        document.validate()
    }
}

fn store(name: &str, address: &str, website: &str) -> SeedStore {
    SeedStore {
        name: name.to_string(),
        address: Some(address.to_string()),
        website: Some(website.to_string()),
    }
}

fn product(name: &str, brand: &str, category: &str) -> SeedProduct {
    SeedProduct {
        name: name.to_string(),
        brand: Some(brand.to_string()),
        category: category.to_string(),
        description: None,
    }
}

fn price(product: &str, store: &str, cents: i64, recorded_on: Option<NaiveDate>) -> SeedPrice {
    SeedPrice {
        product: product.to_string(),
        store: store.to_string(),
        amount: Decimal::new(cents, 2),
        recorded_on,
    }
}

fn hardcoded_document() -> SeedDocument {
    let first = NaiveDate::from_ymd_opt(2024, 1, 15);
    let second = NaiveDate::from_ymd_opt(2024, 2, 15);

    SeedDocument {
        stores: vec![
            store("Corner Market", "12 High Street", "https://corner-market.example.com"),
            store("FreshWay", "88 Station Road", "https://freshway.example.com"),
            store("ValueMart", "3 Ring Road", "https://valuemart.example.com"),
        ],
        products: vec![
            product("Whole Milk 1L", "Dairyland", "Dairy"),
            product("Free Range Eggs 12", "Happy Hen", "Dairy"),
            product("Sourdough Loaf", "Baker's Best", "Bakery"),
            product("Ground Coffee 500g", "Morning Roast", "Beverages"),
            product("Bananas 1kg", "Tropicana Farms", "Produce"),
        ],
        prices: vec![
            price("Whole Milk 1L", "Corner Market", 129, first),
            price("Whole Milk 1L", "FreshWay", 115, first),
            price("Whole Milk 1L", "ValueMart", 99, second),
            price("Free Range Eggs 12", "FreshWay", 349, first),
            price("Free Range Eggs 12", "ValueMart", 319, second),
            price("Sourdough Loaf", "Corner Market", 425, first),
            price("Ground Coffee 500g", "FreshWay", 799, first),
            price("Ground Coffee 500g", "ValueMart", 749, second),
            price("Bananas 1kg", "Corner Market", 189, second),
        ],
    }
}
