use super::*;

/// Tests creating, listing and updating a user's expenses.
///
/// Expected: month filter returns only that month, update replaces the amount
#[tokio::test]
async fn creates_lists_and_updates_expenses() -> Result<(), AppError> {
    let test = TestBuilder::new().with_budget_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();
    let service = ExpenseService::new(db, &email);

    let user = User::from_entity(factory::create_user(db).await?);

    let march = service.create(&user, expense(1250, date(3, 10))).await?;
    service.create(&user, expense(800, date(4, 2))).await?;

    let listed = service
        .get_for_user(
            user.id,
            ExpenseFilter {
                year: Some(2025),
                month: Some(3),
            },
        )
        .await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, march.id);

    let updated = service
        .update(&user, march.id, expense(990, date(3, 11)))
        .await?;
    assert_eq!(updated.amount_cents, 990);
    assert_eq!(updated.spent_on, date(3, 11));

    Ok(())
}

/// Tests that other users' expenses behave as missing.
///
/// Expected: Err(AppError::NotFound) for update and delete
#[tokio::test]
async fn hides_other_users_expenses() -> Result<(), AppError> {
    let test = TestBuilder::new().with_budget_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();
    let service = ExpenseService::new(db, &email);

    let owner = factory::create_user(db).await?;
    let other = User::from_entity(factory::create_user(db).await?);
    let expense_row = factory::create_expense(db, owner.id).await?;

    let update = service
        .update(&other, expense_row.id, expense(100, date(1, 1)))
        .await;
    assert!(matches!(update, Err(AppError::NotFound(_))));

    let delete = service.delete(other.id, expense_row.id).await;
    assert!(matches!(delete, Err(AppError::NotFound(_))));

    service.delete(owner.id, expense_row.id).await?;

    Ok(())
}

/// Tests expense validation.
///
/// Expected: Err(AppError::ValidationErr) on the amount field
#[tokio::test]
async fn rejects_invalid_amount() -> Result<(), AppError> {
    let test = TestBuilder::new().with_budget_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();

    let user = User::from_entity(factory::create_user(db).await?);

    let result = ExpenseService::new(db, &email)
        .create(&user, expense(0, date(1, 1)))
        .await;

    match result {
        Err(AppError::ValidationErr(err)) => assert_eq!(err.field, "amount"),
        other => panic!("Expected ValidationErr, got: {:?}", other.map(|e| e.id)),
    }

    Ok(())
}
