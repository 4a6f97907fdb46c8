use super::*;

/// Tests the alert raised when spending crosses the month's budget.
///
/// Verifies that only the expense that crosses the limit raises an alert; staying
/// under it or adding more once over it does not.
///
/// Expected: exactly one budget_exceeded notification and one email
#[tokio::test]
async fn alerts_once_when_budget_is_crossed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_budget_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();
    let service = ExpenseService::new(db, &email);

    let user = User::from_entity(factory::create_user(db).await?);
    factory::create_budget(db, user.id, 2025, 5, 10_000).await?;

    service.create(&user, expense(6_000, date(5, 1))).await?;
    service.create(&user, expense(4_000, date(5, 2))).await?;
    assert!(email.sent().is_empty());

    service.create(&user, expense(1, date(5, 3))).await?;
    service.create(&user, expense(500, date(5, 4))).await?;

    let notifications = NotificationRepository::new(db)
        .get_for_user(user.id, false)
        .await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, "budget_exceeded");

    let sent = email.sent();
    assert_eq!(sent.len(), 1);
    match &sent[0].template {
        EmailTemplate::BudgetExceeded { year, month, .. } => {
            assert_eq!((*year, *month), (2025, 5));
        }
        other => panic!("Expected BudgetExceeded, got: {:?}", other),
    }

    Ok(())
}

/// Tests that updating an expense upward can cross the budget too.
///
/// Expected: one budget_exceeded notification after the update
#[tokio::test]
async fn alerts_when_update_crosses_budget() -> Result<(), AppError> {
    let test = TestBuilder::new().with_budget_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();
    let service = ExpenseService::new(db, &email);

    let user = User::from_entity(factory::create_user(db).await?);
    factory::create_budget(db, user.id, 2025, 6, 5_000).await?;

    let created = service.create(&user, expense(4_000, date(6, 1))).await?;
    service
        .update(&user, created.id, expense(5_500, date(6, 1)))
        .await?;

    let count = NotificationRepository::new(db).count_unread(user.id).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that months without a budget never alert.
///
/// Expected: no notifications
#[tokio::test]
async fn ignores_months_without_budget() -> Result<(), AppError> {
    let test = TestBuilder::new().with_budget_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();

    let user = User::from_entity(factory::create_user(db).await?);

    ExpenseService::new(db, &email)
        .create(&user, expense(99_999_999, date(7, 1)))
        .await?;

    assert_eq!(
        NotificationRepository::new(db).count_unread(user.id).await?,
        0
    );
    assert!(email.sent().is_empty());

    Ok(())
}
