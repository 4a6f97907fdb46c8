//! Product catalog service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{price::PriceRepository, product::ProductRepository},
    error::AppError,
    model::catalog::{PaginatedProducts, Product, ProductDetail, ProductQuery},
    validation::catalog::ProductBuilder,
};

/// Upper bound on page size for product listings.
const MAX_PER_PAGE: u64 = 100;

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists products by name, filtered by name substring and exact category.
    pub async fn get_paginated(&self, mut query: ProductQuery) -> Result<PaginatedProducts, AppError> {
        query.per_page = query.per_page.clamp(1, MAX_PER_PAGE);

        let (products, total) = ProductRepository::new(self.db)
            .get_paginated(&query)
            .await?;

        Ok(PaginatedProducts {
            products,
            total,
            page: query.page,
            per_page: query.per_page,
            total_pages: total.div_ceil(query.per_page),
        })
    }

    /// Gets a product with the latest price at each store, cheapest first.
    pub async fn get_detail(&self, id: i32) -> Result<ProductDetail, AppError> {
        let product = self.get_by_id(id).await?;
        let prices = PriceRepository::new(self.db).latest_per_store(id).await?;

        Ok(ProductDetail { product, prices })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Product, AppError> {
        ProductRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
    }

    pub async fn create(&self, builder: ProductBuilder) -> Result<Product, AppError> {
        let params = builder.build()?;
        let product_repo = ProductRepository::new(self.db);

        if product_repo.find_by_name(&params.name).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "A product named '{}' already exists",
                params.name
            )));
        }

        let product = product_repo.create(params).await?;
        tracing::info!("Created product {} ({})", product.id, product.name);

        Ok(product)
    }

    pub async fn update(&self, id: i32, builder: ProductBuilder) -> Result<Product, AppError> {
        let params = builder.build()?;
        let product_repo = ProductRepository::new(self.db);

        if let Some(existing) = product_repo.find_by_name(&params.name).await? {
            if existing.id != id {
                return Err(AppError::Conflict(format!(
                    "A product named '{}' already exists",
                    params.name
                )));
            }
        }

        product_repo
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
    }

    /// Deletes a product together with its prices and tracking entries.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = ProductRepository::new(self.db).delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("Product not found".to_string()));
        }

        tracing::info!("Deleted product {}", id);

        Ok(())
    }
}
