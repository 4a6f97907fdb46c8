use super::*;

/// Tests tracking a product, updating its target and listing it.
///
/// Verifies that tracking twice replaces the target and that the list shows the
/// current lowest price.
///
/// Expected: one entry with the latest target and lowest price 199
#[tokio::test]
async fn tracks_and_updates_target() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, product, _) = factory::helpers::create_price_with_dependencies(db).await?;
    let service = TrackingService::new(db);

    service
        .track(user.id, product.id, Some(Decimal::new(300, 2)))
        .await?;
    let updated = service
        .track(user.id, product.id, Some(Decimal::new(150, 2)))
        .await?;
    assert_eq!(updated.target_price_cents, Some(150));

    let tracked = service.get_for_user(user.id).await?;
    assert_eq!(tracked.len(), 1);
    assert_eq!(tracked[0].product_id, product.id);
    assert_eq!(tracked[0].lowest_price_cents, Some(199));

    Ok(())
}

/// Tests tracking validation and untracking.
///
/// Expected: invalid target ValidationErr, unknown product NotFound, untrack twice NotFound
#[tokio::test]
async fn validates_and_untracks() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let product = factory::create_product(db).await?;
    let service = TrackingService::new(db);

    let negative = service
        .track(user.id, product.id, Some(Decimal::new(-100, 2)))
        .await;
    assert!(matches!(negative, Err(AppError::ValidationErr(_))));

    let missing = service.track(user.id, product.id + 100, None).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    service.track(user.id, product.id, None).await?;
    service.untrack(user.id, product.id).await?;
    assert!(matches!(
        service.untrack(user.id, product.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
