use super::*;

/// Tests creating a store.
///
/// Expected: Ok with store retrievable by id and by name
#[tokio::test]
async fn creates_store() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StoreRepository::new(db);
    let store = repo
        .create(StoreParams {
            name: "Corner Shop".to_string(),
            address: Some("1 High St".to_string()),
            website: None,
        })
        .await?;

    assert_eq!(store.name, "Corner Shop");
    assert_eq!(repo.find_by_id(store.id).await?, Some(store.clone()));
    assert_eq!(repo.find_by_name("Corner Shop").await?, Some(store));

    Ok(())
}

/// Tests the unique store name constraint.
///
/// Expected: Err on duplicate name
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::store::StoreFactory::new(db)
        .name("Market")
        .build()
        .await?;

    let result = StoreRepository::new(db)
        .create(StoreParams {
            name: "Market".to_string(),
            address: None,
            website: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
