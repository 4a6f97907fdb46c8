use super::*;

/// Tests listing expenses newest first and scoped to the owner.
///
/// Expected: only the user's expenses, latest date first
#[tokio::test]
async fn lists_own_expenses_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_budget_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    for day in [3, 10, 7] {
        factory::expense::ExpenseFactory::new(db, user.id)
            .spent_on(date(2026, 4, day))
            .build()
            .await?;
    }
    factory::create_expense(db, other.id).await?;

    let expenses = ExpenseRepository::new(db)
        .get_for_user(user.id, ExpenseFilter::default())
        .await?;

    assert_eq!(
        expenses.iter().map(|e| e.spent_on).collect::<Vec<_>>(),
        vec![date(2026, 4, 10), date(2026, 4, 7), date(2026, 4, 3)]
    );

    Ok(())
}

/// Tests the year and month filters.
///
/// Expected: month filter covers only that month, year filter the whole year
#[tokio::test]
async fn filters_by_month_and_year() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_budget_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for spent_on in [date(2025, 12, 31), date(2026, 1, 1), date(2026, 1, 31), date(2026, 2, 1)] {
        factory::expense::ExpenseFactory::new(db, user.id)
            .spent_on(spent_on)
            .build()
            .await?;
    }

    let repo = ExpenseRepository::new(db);
    let january = repo
        .get_for_user(
            user.id,
            ExpenseFilter {
                year: Some(2026),
                month: Some(1),
            },
        )
        .await?;
    let year = repo
        .get_for_user(
            user.id,
            ExpenseFilter {
                year: Some(2026),
                month: None,
            },
        )
        .await?;

    assert_eq!(january.len(), 2);
    assert_eq!(year.len(), 3);

    Ok(())
}

/// Tests the month range helper across a year boundary.
#[test]
fn month_range_handles_december() {
    assert_eq!(
        month_range(2026, 12),
        Some((date(2026, 12, 1), date(2027, 1, 1)))
    );
    assert_eq!(month_range(2026, 13), None);
}
