use super::*;

/// Tests that deleting a product removes its prices and tracking entries.
///
/// Expected: Ok(true) and no dependent rows left
#[tokio::test]
async fn deletes_product_with_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_store, product, _price) =
        factory::helpers::create_price_with_dependencies(db).await?;
    let user = factory::create_user(db).await?;
    crate::server::data::tracked_product::TrackedProductRepository::new(db)
        .upsert(user.id, product.id, Some(100))
        .await?;

    assert!(ProductRepository::new(db).delete(product.id).await?);

    assert_eq!(entity::prelude::Price::find().count(db).await?, 0);
    assert_eq!(entity::prelude::TrackedProduct::find().count(db).await?, 0);

    Ok(())
}
