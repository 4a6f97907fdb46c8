use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{price::PriceRepository, product::ProductRepository, store::StoreRepository},
    error::{seed::SeedError, AppError},
    seed::provider::SeedProvider,
    validation::catalog::PriceBuilder,
};

/// Counts of records written and skipped by a seed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub stores_created: usize,
    pub stores_skipped: usize,
    pub products_created: usize,
    pub products_skipped: usize,
    pub prices_created: usize,
    pub prices_skipped: usize,
}

pub struct Seeder<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> Seeder<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads data from `provider` and writes it in a single transaction.
    ///
    /// Stores and products that already exist by name, and prices already recorded
    /// for the same product, store and day, are skipped. Any invalid record rolls back
    /// the whole run.
    ///
    /// # Returns
    /// - `Ok(SeedReport)` - Counts of created and skipped records
    /// - `Err(AppError::SeedErr)` - Provider failed, a record was invalid or a price
    ///   referenced an unknown store or product
    /// - `Err(AppError::DbErr)` - Database error; nothing was written
    pub async fn run(&self, provider: &dyn SeedProvider) -> Result<SeedReport, AppError> {
        let data = provider.load()?;
        let mut report = SeedReport::default();

        let txn = self.db.begin().await?;
        let store_repo = StoreRepository::new(&txn);
        let product_repo = ProductRepository::new(&txn);
        let price_repo = PriceRepository::new(&txn);

        for params in data.stores {
            if store_repo.find_by_name(&params.name).await?.is_some() {
                report.stores_skipped += 1;
            } else {
                store_repo.create(params).await?;
                report.stores_created += 1;
            }
        }

        for params in data.products {
            if product_repo.find_by_name(&params.name).await?.is_some() {
                report.products_skipped += 1;
            } else {
                product_repo.create(params).await?;
                report.products_created += 1;
            }
        }

        for (index, seed_price) in data.prices.into_iter().enumerate() {
            let product = product_repo
                .find_by_name(seed_price.product.trim())
                .await?
                .ok_or_else(|| SeedError::UnknownReference {
                    index,
                    kind: "product",
                    name: seed_price.product.clone(),
                })?;
            let store = store_repo
                .find_by_name(seed_price.store.trim())
                .await?
                .ok_or_else(|| SeedError::UnknownReference {
                    index,
                    kind: "store",
                    name: seed_price.store.clone(),
                })?;

            let params = PriceBuilder::new()
                .product_id(product.id)
                .store_id(store.id)
                .amount(seed_price.amount)
                .recorded_on(seed_price.recorded_on)
                .build()
                .map_err(|source| SeedError::InvalidRecord {
                    record: "price",
                    index,
                    source,
                })?;

            if price_repo
                .exists(params.product_id, params.store_id, params.recorded_on)
                .await?
            {
                report.prices_skipped += 1;
            } else {
                price_repo.create(params).await?;
                report.prices_created += 1;
            }
        }

        txn.commit().await?;

        tracing::info!(
            "Seeded from {}: {} stores, {} products, {} prices created ({} stores, {} products, {} prices already present)",
            provider.name(),
            report.stores_created,
            report.products_created,
            report.prices_created,
            report.stores_skipped,
            report.products_skipped,
            report.prices_skipped
        );

        Ok(report)
    }
}
