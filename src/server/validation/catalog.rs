//! Builders for stores, products and price observations.
//!
//! Used both by the catalog endpoints and by the seeder, so seeded reference data
//! obeys exactly the same rules as data entered through the API.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::server::{
    error::validation::ValidationError,
    model::{
        catalog::{ProductParams, StoreParams},
        price::PriceParams,
    },
    util::money,
    validation::{optional_text, required_text},
};

const NAME_MAX: usize = 100;
const CATEGORY_MAX: usize = 50;
const ADDRESS_MAX: usize = 200;
const WEBSITE_MAX: usize = 200;
const BRAND_MAX: usize = 100;
const PRODUCT_DESCRIPTION_MAX: usize = 1000;
/// Upper bound for a single price, 100 000.00.
const MAX_PRICE_CENTS: i64 = 10_000_000;

/// Words that mark a product name as filler rather than a real product.
const FORBIDDEN_PRODUCT_WORDS: [&str; 4] = ["test", "dummy", "sample", "placeholder"];

#[derive(Default)]
pub struct StoreBuilder {
    name: Option<String>,
    address: Option<String>,
    website: Option<String>,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn address(mut self, address: Option<String>) -> Self {
        self.address = address;
        self
    }

    pub fn website(mut self, website: Option<String>) -> Self {
        self.website = website;
        self
    }

    pub fn build(self) -> Result<StoreParams, ValidationError> {
        let name = required_text("name", self.name, 1, NAME_MAX)?;
        let address = optional_text("address", self.address, ADDRESS_MAX)?;
        let website = optional_text("website", self.website, WEBSITE_MAX)?;

        if let Some(website) = &website {
            if !(website.starts_with("http://") || website.starts_with("https://")) {
                return Err(ValidationError::new(
                    "website",
                    "website must start with http:// or https://",
                ));
            }
        }

        Ok(StoreParams {
            name,
            address,
            website,
        })
    }
}

#[derive(Default)]
pub struct ProductBuilder {
    name: Option<String>,
    brand: Option<String>,
    category: Option<String>,
    description: Option<String>,
}

impl ProductBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn brand(mut self, brand: Option<String>) -> Self {
        self.brand = brand;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn build(self) -> Result<ProductParams, ValidationError> {
        let name = required_text("name", self.name, 1, NAME_MAX)?;

        if let Some(word) = forbidden_word(&name) {
            return Err(ValidationError::new(
                "name",
                format!("name must not contain the word '{}'", word),
            ));
        }

        let brand = optional_text("brand", self.brand, BRAND_MAX)?;
        let category = required_text("category", self.category, 1, CATEGORY_MAX)?;
        let description = optional_text("description", self.description, PRODUCT_DESCRIPTION_MAX)?;

        Ok(ProductParams {
            name,
            brand,
            category,
            description,
        })
    }
}

/// Returns the first forbidden word appearing as a whole word, ignoring case.
fn forbidden_word(name: &str) -> Option<&'static str> {
    let lower = name.to_lowercase();
    let words: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    FORBIDDEN_PRODUCT_WORDS
        .into_iter()
        .find(|forbidden| words.contains(forbidden))
}

#[derive(Default)]
pub struct PriceBuilder {
    product_id: Option<i32>,
    store_id: Option<i32>,
    amount: Option<Decimal>,
    recorded_on: Option<NaiveDate>,
}

impl PriceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn product_id(mut self, product_id: i32) -> Self {
        self.product_id = Some(product_id);
        self
    }

    pub fn store_id(mut self, store_id: i32) -> Self {
        self.store_id = Some(store_id);
        self
    }

    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Observation date; today (UTC) when not set.
    pub fn recorded_on(mut self, recorded_on: Option<NaiveDate>) -> Self {
        self.recorded_on = recorded_on;
        self
    }

    pub fn build(self) -> Result<PriceParams, ValidationError> {
        self.build_as_of(Utc::now().date_naive())
    }

    /// Validates with `today` as the latest acceptable observation date.
    pub fn build_as_of(self, today: NaiveDate) -> Result<PriceParams, ValidationError> {
        let product_id = self
            .product_id
            .ok_or_else(|| ValidationError::new("product_id", "product_id is required"))?;
        let store_id = self
            .store_id
            .ok_or_else(|| ValidationError::new("store_id", "store_id is required"))?;
        let amount_cents = amount_cents("amount", self.amount, MAX_PRICE_CENTS)?;

        let recorded_on = self.recorded_on.unwrap_or(today);
        if recorded_on > today {
            return Err(ValidationError::new(
                "recorded_on",
                "recorded_on cannot be in the future",
            ));
        }

        Ok(PriceParams {
            product_id,
            store_id,
            amount_cents,
            recorded_on,
        })
    }
}

/// Validates an optional price-alert threshold with the same rules as a price.
pub fn target_price_cents(target: Option<Decimal>) -> Result<Option<i64>, ValidationError> {
    target
        .map(|target| amount_cents("target_price", Some(target), MAX_PRICE_CENTS))
        .transpose()
}

/// Validates a positive money amount with at most two decimals and converts it to cents.
pub(crate) fn amount_cents(
    field: &str,
    amount: Option<Decimal>,
    max_cents: i64,
) -> Result<i64, ValidationError> {
    let Some(amount) = amount else {
        return Err(ValidationError::new(field, format!("{} is required", field)));
    };

    if amount <= Decimal::ZERO {
        return Err(ValidationError::new(
            field,
            format!("{} must be greater than zero", field),
        ));
    }
    if !money::has_valid_scale(amount) {
        return Err(ValidationError::new(
            field,
            format!("{} must have at most two decimal places", field),
        ));
    }

    match money::to_cents(amount) {
        Some(cents) if cents <= max_cents => Ok(cents),
        _ => Err(ValidationError::new(
            field,
            format!(
                "{} must not exceed {}",
                field,
                money::from_cents(max_cents)
            ),
        )),
    }
}
