use super::*;

/// Tests creating products with validation and unique names.
///
/// Expected: forbidden word rejected, duplicate name Conflict
#[tokio::test]
async fn creates_product() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ProductService::new(db);

    let created = service.create(product("Oat Milk")).await?;
    assert_eq!(created.category, "Groceries");

    let duplicate = service.create(product("Oat Milk")).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    let forbidden = service.create(product("Test Milk")).await;
    assert!(matches!(forbidden, Err(AppError::ValidationErr(_))));

    Ok(())
}

/// Tests listing with search and a clamped page size.
///
/// Expected: only matching products, per_page clamped to at least 1
#[tokio::test]
async fn lists_matching_products() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ProductService::new(db);

    service.create(product("Oat Milk")).await?;
    service.create(product("Almond Milk")).await?;
    service.create(product("Rye Bread")).await?;

    let page = service
        .get_paginated(ProductQuery {
            search: Some("milk".to_string()),
            category: None,
            page: 0,
            per_page: 0,
        })
        .await?;

    assert_eq!(page.total, 2);
    assert_eq!(page.per_page, 1);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.products[0].name, "Almond Milk");

    Ok(())
}

/// Tests that deleting a product removes its prices.
///
/// Expected: product gone, second delete NotFound
#[tokio::test]
async fn deletes_product_with_prices() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (store, product, _) = factory::helpers::create_price_with_dependencies(db).await?;
    let service = ProductService::new(db);

    service.delete(product.id).await?;

    assert!(matches!(
        service.get_by_id(product.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.delete(product.id).await,
        Err(AppError::NotFound(_))
    ));

    // Store is free to delete once the product's prices are gone.
    crate::server::service::store::StoreService::new(db)
        .delete(store.id)
        .await?;

    Ok(())
}
