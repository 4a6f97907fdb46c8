use super::*;

/// Tests price history filtering by date range.
///
/// Expected: only observations inside the inclusive range, oldest first
#[tokio::test]
async fn filters_history_by_range() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();
    let service = PriceService::new(db, &email);

    let store = factory::create_store(db).await?;
    let product = factory::create_product(db).await?;
    for day in [1, 5, 10] {
        service.record(price(product.id, store.id, 100 + day as i64, day)).await?;
    }

    let history = service
        .history(
            product.id,
            PriceHistoryQuery {
                from: Some(date(2)),
                to: Some(date(10)),
            },
        )
        .await?;

    let days: Vec<NaiveDate> = history.iter().map(|p| p.recorded_on).collect();
    assert_eq!(days, vec![date(5), date(10)]);

    Ok(())
}

/// Tests that an inverted range and an unknown product are rejected.
///
/// Expected: BadRequest for from > to, NotFound for a missing product
#[tokio::test]
async fn rejects_bad_history_requests() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();
    let service = PriceService::new(db, &email);

    let product = factory::create_product(db).await?;

    let inverted = service
        .history(
            product.id,
            PriceHistoryQuery {
                from: Some(date(10)),
                to: Some(date(1)),
            },
        )
        .await;
    assert!(matches!(inverted, Err(AppError::BadRequest(_))));

    let missing = service
        .history(product.id + 100, PriceHistoryQuery::default())
        .await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting a price.
///
/// Expected: Ok then NotFound
#[tokio::test]
async fn deletes_price() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();
    let service = PriceService::new(db, &email);

    let (_, _, price) = factory::helpers::create_price_with_dependencies(db).await?;

    service.delete(price.id).await?;
    assert!(matches!(
        service.delete(price.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
