//! Per-user product tracking with optional price-alert targets.

use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        price::PriceRepository, product::ProductRepository,
        tracked_product::TrackedProductRepository,
    },
    error::AppError,
    model::price::TrackedProduct,
    validation::catalog::target_price_cents,
};

pub struct TrackingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrackingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the user's tracked products with each product's current lowest price.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<TrackedProduct>, AppError> {
        let price_repo = PriceRepository::new(self.db);
        let tracked = TrackedProductRepository::new(self.db)
            .get_for_user(user_id)
            .await?;

        let mut result = Vec::with_capacity(tracked.len());
        for (entry, product) in tracked {
            let lowest_price_cents = price_repo
                .latest_per_store(product.id)
                .await?
                .first()
                .map(|price| price.amount_cents);

            result.push(TrackedProduct {
                product_id: product.id,
                product_name: product.name,
                target_price_cents: entry.target_price_cents,
                lowest_price_cents,
                created_at: entry.created_at,
            });
        }

        Ok(result)
    }

    /// Starts tracking a product or replaces the target of an existing entry.
    ///
    /// # Returns
    /// - `Ok(TrackedProduct)` - The tracking entry
    /// - `Err(AppError::ValidationErr)` - Target price rejected
    /// - `Err(AppError::NotFound)` - Product does not exist
    pub async fn track(
        &self,
        user_id: i32,
        product_id: i32,
        target_price: Option<Decimal>,
    ) -> Result<TrackedProduct, AppError> {
        let target_price_cents = target_price_cents(target_price)?;

        let product = ProductRepository::new(self.db)
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

        let entry = TrackedProductRepository::new(self.db)
            .upsert(user_id, product_id, target_price_cents)
            .await?;

        let lowest_price_cents = PriceRepository::new(self.db)
            .latest_per_store(product_id)
            .await?
            .first()
            .map(|price| price.amount_cents);

        Ok(TrackedProduct {
            product_id,
            product_name: product.name,
            target_price_cents: entry.target_price_cents,
            lowest_price_cents,
            created_at: entry.created_at,
        })
    }

    pub async fn untrack(&self, user_id: i32, product_id: i32) -> Result<(), AppError> {
        let deleted = TrackedProductRepository::new(self.db)
            .delete(user_id, product_id)
            .await?;
        if !deleted {
            return Err(AppError::NotFound(
                "Product is not being tracked".to_string(),
            ));
        }
        Ok(())
    }
}
