use super::*;

/// Tests that an expense can only be changed by its owner.
///
/// Expected: Ok(Some) for the owner, Ok(None) for another user
#[tokio::test]
async fn updates_only_own_expense() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_budget_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let expense = factory::create_expense(db, user.id).await?;

    let params = ExpenseParams {
        description: "Dinner".to_string(),
        category: "Food".to_string(),
        amount_cents: 3_200,
        spent_on: date(2026, 5, 5),
    };

    let repo = ExpenseRepository::new(db);
    assert!(repo
        .update(expense.id, other.id, params.clone())
        .await?
        .is_none());

    let updated = repo.update(expense.id, user.id, params).await?.unwrap();
    assert_eq!(updated.description, "Dinner");
    assert_eq!(updated.amount_cents, 3_200);

    assert!(!repo.delete(expense.id, other.id).await?);
    assert!(repo.delete(expense.id, user.id).await?);

    Ok(())
}
