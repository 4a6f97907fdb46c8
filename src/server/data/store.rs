//! Store data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::catalog::{Store, StoreParams};

/// Repository providing database operations for stores.
///
/// Generic over the connection so it works with both the pooled connection and a
/// `DatabaseTransaction` (used by the seeder).
pub struct StoreRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StoreRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all stores ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Store>, DbErr> {
        let entities = entity::prelude::Store::find()
            .order_by_asc(entity::store::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Store::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Store>, DbErr> {
        let entity = entity::prelude::Store::find_by_id(id).one(self.db).await?;
        Ok(entity.map(Store::from_entity))
    }

    /// Finds a store by exact name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Store>, DbErr> {
        let entity = entity::prelude::Store::find()
            .filter(entity::store::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Store::from_entity))
    }

    pub async fn create(&self, params: StoreParams) -> Result<Store, DbErr> {
        let entity = entity::store::ActiveModel {
            name: ActiveValue::Set(params.name),
            address: ActiveValue::Set(params.address),
            website: ActiveValue::Set(params.website),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Store::from_entity(entity))
    }

    /// Replaces a store's fields.
    ///
    /// # Returns
    /// - `Ok(Some(Store))` - Updated store
    /// - `Ok(None)` - No store with that ID
    pub async fn update(&self, id: i32, params: StoreParams) -> Result<Option<Store>, DbErr> {
        let Some(existing) = entity::prelude::Store::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::store::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.address = ActiveValue::Set(params.address);
        active.website = ActiveValue::Set(params.website);

        let entity = active.update(self.db).await?;
        Ok(Some(Store::from_entity(entity)))
    }

    /// Deletes a store.
    ///
    /// # Returns
    /// - `Ok(true)` - Store deleted
    /// - `Ok(false)` - No store with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Store::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
