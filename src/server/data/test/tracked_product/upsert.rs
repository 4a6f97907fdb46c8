use super::*;

/// Tests that tracking twice updates the target instead of duplicating.
///
/// Expected: one entry with the latest target
#[tokio::test]
async fn upserts_target_price() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let product = factory::create_product(db).await?;

    let repo = TrackedProductRepository::new(db);
    let first = repo.upsert(user.id, product.id, Some(500)).await?;
    let second = repo.upsert(user.id, product.id, None).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.target_price_cents, None);

    let tracked = repo.get_for_user(user.id).await?;
    assert_eq!(tracked.len(), 1);
    assert_eq!(tracked[0].1.id, product.id);

    Ok(())
}

/// Tests untracking.
///
/// Expected: true when tracked, false afterwards
#[tokio::test]
async fn deletes_tracking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let product = factory::create_product(db).await?;

    let repo = TrackedProductRepository::new(db);
    repo.upsert(user.id, product.id, None).await?;

    assert!(repo.delete(user.id, product.id).await?);
    assert!(!repo.delete(user.id, product.id).await?);

    Ok(())
}
