use super::*;

/// Tests deleting a store without prices.
///
/// Expected: Ok(true), then Ok(false) on repeat
#[tokio::test]
async fn deletes_store() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let store = factory::create_store(db).await?;

    let repo = StoreRepository::new(db);
    assert!(repo.delete(store.id).await?);
    assert!(!repo.delete(store.id).await?);

    Ok(())
}
