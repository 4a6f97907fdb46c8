use super::*;

/// Tests selecting users to alert for a new price.
///
/// Verifies that targets at or above the price match, lower targets and
/// entries without a target do not.
///
/// Expected: two matching users
#[tokio::test]
async fn finds_targets_at_or_above_amount() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::create_product(db).await?;
    let repo = TrackedProductRepository::new(db);

    let mut expected = Vec::new();
    for target in [Some(300), Some(250), Some(249), None] {
        let user = factory::create_user(db).await?;
        repo.upsert(user.id, product.id, target).await?;
        if target.is_some_and(|t| t >= 250) {
            expected.push(user.id);
        }
    }

    let mut matched: Vec<i32> = repo
        .find_alert_targets(product.id, 250)
        .await?
        .into_iter()
        .map(|t| t.user_id)
        .collect();
    matched.sort();

    assert_eq!(matched, expected);

    Ok(())
}
