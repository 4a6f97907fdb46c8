//! Product data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::catalog::{Product, ProductParams, ProductQuery};

/// Repository providing database operations for products.
pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a page of products ordered by name.
    ///
    /// `search` matches anywhere in the name; SQLite `LIKE` is case-insensitive for
    /// ASCII. `category` must match exactly.
    ///
    /// # Returns
    /// - `Ok((products, total))` - Products on the requested page and the total match count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(&self, query: &ProductQuery) -> Result<(Vec<Product>, u64), DbErr> {
        let mut select = entity::prelude::Product::find();

        if let Some(search) = query.search.as_deref().filter(|s| !s.trim().is_empty()) {
            select = select.filter(entity::product::Column::Name.contains(search.trim()));
        }
        if let Some(category) = query.category.as_deref().filter(|c| !c.trim().is_empty()) {
            select = select.filter(entity::product::Column::Category.eq(category.trim()));
        }

        let paginator = select
            .order_by_asc(entity::product::Column::Name)
            .paginate(self.db, query.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(query.page).await?;

        Ok((
            entities.into_iter().map(Product::from_entity).collect(),
            total,
        ))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Product>, DbErr> {
        let entity = entity::prelude::Product::find_by_id(id).one(self.db).await?;
        Ok(entity.map(Product::from_entity))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Product>, DbErr> {
        let entity = entity::prelude::Product::find()
            .filter(entity::product::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Product::from_entity))
    }

    pub async fn create(&self, params: ProductParams) -> Result<Product, DbErr> {
        let entity = entity::product::ActiveModel {
            name: ActiveValue::Set(params.name),
            brand: ActiveValue::Set(params.brand),
            category: ActiveValue::Set(params.category),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Product::from_entity(entity))
    }

    /// Replaces a product's fields. Returns `None` when the product does not exist.
    pub async fn update(&self, id: i32, params: ProductParams) -> Result<Option<Product>, DbErr> {
        let Some(existing) = entity::prelude::Product::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::product::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.brand = ActiveValue::Set(params.brand);
        active.category = ActiveValue::Set(params.category);
        active.description = ActiveValue::Set(params.description);

        let entity = active.update(self.db).await?;
        Ok(Some(Product::from_entity(entity)))
    }

    /// Deletes a product together with its prices and tracking entries.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::Price::delete_many()
            .filter(entity::price::Column::ProductId.eq(id))
            .exec(self.db)
            .await?;
        entity::prelude::TrackedProduct::delete_many()
            .filter(entity::tracked_product::Column::ProductId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Product::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
