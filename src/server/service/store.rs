//! Store catalog service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{price::PriceRepository, store::StoreRepository},
    error::AppError,
    model::catalog::Store,
    validation::catalog::StoreBuilder,
};

pub struct StoreService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StoreService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Store>, AppError> {
        Ok(StoreRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Store, AppError> {
        StoreRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Store not found".to_string()))
    }

    /// Validates and creates a store.
    ///
    /// # Returns
    /// - `Ok(Store)` - Created store
    /// - `Err(AppError::ValidationErr)` - Field rules failed
    /// - `Err(AppError::Conflict)` - Another store already uses the name
    pub async fn create(&self, builder: StoreBuilder) -> Result<Store, AppError> {
        let params = builder.build()?;
        let store_repo = StoreRepository::new(self.db);

        if store_repo.find_by_name(&params.name).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "A store named '{}' already exists",
                params.name
            )));
        }

        let store = store_repo.create(params).await?;
        tracing::info!("Created store {} ({})", store.id, store.name);

        Ok(store)
    }

    pub async fn update(&self, id: i32, builder: StoreBuilder) -> Result<Store, AppError> {
        let params = builder.build()?;
        let store_repo = StoreRepository::new(self.db);

        if let Some(existing) = store_repo.find_by_name(&params.name).await? {
            if existing.id != id {
                return Err(AppError::Conflict(format!(
                    "A store named '{}' already exists",
                    params.name
                )));
            }
        }

        store_repo
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Store not found".to_string()))
    }

    /// Deletes a store that has no recorded prices.
    ///
    /// # Returns
    /// - `Ok(())` - Store deleted
    /// - `Err(AppError::NotFound)` - No such store
    /// - `Err(AppError::Conflict)` - Prices still reference the store
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let store_repo = StoreRepository::new(self.db);

        if store_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Store not found".to_string()));
        }

        let price_count = PriceRepository::new(self.db).count_for_store(id).await?;
        if price_count > 0 {
            return Err(AppError::Conflict(format!(
                "Store still has {} recorded price(s)",
                price_count
            )));
        }

        store_repo.delete(id).await?;
        tracing::info!("Deleted store {}", id);

        Ok(())
    }
}
