use super::*;

/// Tests recording a price and rejecting a second one for the same day.
///
/// Expected: Ok(Price) with the store name, then Err(AppError::Conflict)
#[tokio::test]
async fn records_price_once_per_day() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();
    let service = PriceService::new(db, &email);

    let store = factory::create_store(db).await?;
    let product = factory::create_product(db).await?;

    let recorded = service.record(price(product.id, store.id, 249, 1)).await?;
    assert_eq!(recorded.amount_cents, 249);
    assert_eq!(recorded.store_name, store.name);

    let duplicate = service.record(price(product.id, store.id, 199, 1)).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that prices must reference an existing product and store.
///
/// Expected: Err(AppError::NotFound) for each missing reference
#[tokio::test]
async fn rejects_unknown_product_or_store() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();
    let service = PriceService::new(db, &email);

    let store = factory::create_store(db).await?;
    let product = factory::create_product(db).await?;

    let no_product = service.record(price(product.id + 100, store.id, 100, 1)).await;
    assert!(matches!(no_product, Err(AppError::NotFound(_))));

    let no_store = service.record(price(product.id, store.id + 100, 100, 1)).await;
    assert!(matches!(no_store, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests price alerts for users tracking the product.
///
/// Verifies that users whose target is at or above the new price get a notification
/// and an email, while users with a lower target or no target get nothing.
///
/// Expected: one alert notification and one PriceAlert email
#[tokio::test]
async fn alerts_users_whose_target_is_met() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();

    let store = factory::create_store(db).await?;
    let product = factory::create_product(db).await?;
    let hopeful = factory::create_user(db).await?;
    let picky = factory::create_user(db).await?;
    let watcher = factory::create_user(db).await?;

    let tracking = TrackedProductRepository::new(db);
    tracking.upsert(hopeful.id, product.id, Some(300)).await?;
    tracking.upsert(picky.id, product.id, Some(100)).await?;
    tracking.upsert(watcher.id, product.id, None).await?;

    PriceService::new(db, &email)
        .record(price(product.id, store.id, 250, 2))
        .await?;

    let notifications = NotificationRepository::new(db);
    let alerts = notifications.get_for_user(hopeful.id, false).await?;
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, "price_alert");
    assert!(notifications.get_for_user(picky.id, false).await?.is_empty());
    assert!(notifications.get_for_user(watcher.id, false).await?.is_empty());

    let sent = email.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, hopeful.email);
    assert!(matches!(sent[0].template, EmailTemplate::PriceAlert { .. }));

    Ok(())
}
