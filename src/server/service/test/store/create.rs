use super::*;

/// Tests creating stores and the unique name rule.
///
/// Expected: first create succeeds, duplicate name Err(AppError::Conflict)
#[tokio::test]
async fn creates_store_with_unique_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = StoreService::new(db);

    let created = service
        .create(store("Corner Market").website(Some("https://corner.example".to_string())))
        .await?;
    assert_eq!(created.name, "Corner Market");

    let duplicate = service.create(store("Corner Market")).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that renaming a store to its own name is allowed but another store's is not.
///
/// Expected: Ok for the same name, Conflict for a taken name, NotFound for a missing store
#[tokio::test]
async fn updates_store_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = StoreService::new(db);

    let first = service.create(store("First")).await?;
    service.create(store("Second")).await?;

    let same = service.update(first.id, store("First")).await?;
    assert_eq!(same.id, first.id);

    let taken = service.update(first.id, store("Second")).await;
    assert!(matches!(taken, Err(AppError::Conflict(_))));

    let missing = service.update(first.id + 1000, store("Third")).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that store fields are validated before writing.
///
/// Expected: Err(AppError::ValidationErr) for an empty name
#[tokio::test]
async fn rejects_invalid_store() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StoreService::new(db).create(store("   ")).await;

    assert!(matches!(result, Err(AppError::ValidationErr(_))));

    Ok(())
}
