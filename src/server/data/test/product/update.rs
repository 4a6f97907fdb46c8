use super::*;

/// Tests replacing a product's fields.
///
/// Expected: Ok(Some) with the new values
#[tokio::test]
async fn updates_product() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::create_product(db).await?;

    let updated = ProductRepository::new(db)
        .update(
            product.id,
            ProductParams {
                name: "Butter".to_string(),
                brand: Some("Farm".to_string()),
                category: "Dairy".to_string(),
                description: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.id, product.id);
    assert_eq!(updated.name, "Butter");
    assert_eq!(updated.brand.as_deref(), Some("Farm"));

    Ok(())
}
