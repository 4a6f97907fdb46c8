use super::*;

/// Tests per-category totals for a month.
///
/// Expected: categories summed and ordered largest first, other months excluded
#[tokio::test]
async fn sums_month_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_budget_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for (category, cents, spent_on) in [
        ("Food", 1_000, date(2026, 5, 1)),
        ("Transport", 4_000, date(2026, 5, 2)),
        ("Food", 2_500, date(2026, 5, 20)),
        ("Food", 9_999, date(2026, 6, 1)),
    ] {
        factory::expense::ExpenseFactory::new(db, user.id)
            .category(category)
            .amount_cents(cents)
            .spent_on(spent_on)
            .build()
            .await?;
    }

    let repo = ExpenseRepository::new(db);
    let by_category = repo.month_by_category(user.id, 2026, 5).await?;

    assert_eq!(by_category.len(), 2);
    assert_eq!(by_category[0].category, "Transport");
    assert_eq!(by_category[0].amount_cents, 4_000);
    assert_eq!(by_category[1].category, "Food");
    assert_eq!(by_category[1].amount_cents, 3_500);
    assert_eq!(repo.month_total(user.id, 2026, 5).await?, 7_500);

    Ok(())
}
