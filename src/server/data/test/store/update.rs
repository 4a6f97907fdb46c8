use super::*;

/// Tests replacing a store's fields.
///
/// Expected: Ok(Some) with new values
#[tokio::test]
async fn updates_store() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let store = factory::store::StoreFactory::new(db)
        .address("Old Rd")
        .build()
        .await?;

    let updated = StoreRepository::new(db)
        .update(
            store.id,
            StoreParams {
                name: "Renamed".to_string(),
                address: None,
                website: Some("https://renamed.example".to_string()),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.address, None);
    assert_eq!(updated.website.as_deref(), Some("https://renamed.example"));

    Ok(())
}

/// Tests updating a missing store.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_store() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StoreRepository::new(db)
        .update(
            999,
            StoreParams {
                name: "Ghost".to_string(),
                address: None,
                website: None,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
