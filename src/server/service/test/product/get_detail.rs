use super::*;

/// Tests the product detail view.
///
/// Verifies that only the latest price per store is shown and that the cheapest
/// store comes first.
///
/// Expected: two store prices, cheapest first, older observation ignored
#[tokio::test]
async fn shows_latest_price_per_store() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::create_product(db).await?;
    let cheap = factory::create_store(db).await?;
    let pricey = factory::create_store(db).await?;

    let day = |d| NaiveDate::from_ymd_opt(2025, 3, d).unwrap();
    factory::price::PriceFactory::new(db, product.id, cheap.id)
        .amount_cents(100)
        .recorded_on(day(1))
        .build()
        .await?;
    factory::price::PriceFactory::new(db, product.id, cheap.id)
        .amount_cents(150)
        .recorded_on(day(5))
        .build()
        .await?;
    factory::price::PriceFactory::new(db, product.id, pricey.id)
        .amount_cents(300)
        .recorded_on(day(2))
        .build()
        .await?;

    let detail = ProductService::new(db).get_detail(product.id).await?;

    assert_eq!(detail.prices.len(), 2);
    assert_eq!(detail.prices[0].store_id, cheap.id);
    assert_eq!(detail.prices[0].amount_cents, 150);
    assert_eq!(detail.lowest_price().map(|p| p.amount_cents), Some(150));

    Ok(())
}

/// Tests the detail view for an unknown product.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_product() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ProductService::new(db).get_detail(42).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
