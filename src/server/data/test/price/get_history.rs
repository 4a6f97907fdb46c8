use super::*;

/// Tests price history ordering and date window.
///
/// Verifies prices are ordered by date then store name and that `from`/`to`
/// bounds are inclusive.
///
/// Expected: Ok with matching prices in order
#[tokio::test]
async fn returns_history_within_window() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::create_product(db).await?;
    let beta = factory::store::StoreFactory::new(db).name("Beta").build().await?;
    let alpha = factory::store::StoreFactory::new(db).name("Alpha").build().await?;

    for (store_id, day, cents) in [
        (beta.id, 1, 100),
        (alpha.id, 2, 110),
        (beta.id, 2, 105),
        (alpha.id, 3, 120),
    ] {
        factory::price::PriceFactory::new(db, product.id, store_id)
            .recorded_on(date(2026, 2, day))
            .amount_cents(cents)
            .build()
            .await?;
    }

    let repo = PriceRepository::new(db);

    let all = repo
        .get_history(product.id, &PriceHistoryQuery::default())
        .await?;
    assert_eq!(
        all.iter()
            .map(|p| (p.recorded_on, p.store_name.as_str()))
            .collect::<Vec<_>>(),
        vec![
            (date(2026, 2, 1), "Beta"),
            (date(2026, 2, 2), "Alpha"),
            (date(2026, 2, 2), "Beta"),
            (date(2026, 2, 3), "Alpha"),
        ]
    );

    let window = repo
        .get_history(
            product.id,
            &PriceHistoryQuery {
                from: Some(date(2026, 2, 2)),
                to: Some(date(2026, 2, 2)),
            },
        )
        .await?;
    assert_eq!(window.len(), 2);

    Ok(())
}
