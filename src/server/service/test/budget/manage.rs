use super::*;

/// Tests that setting a budget twice for a month replaces the limit.
///
/// Expected: one budget holding the second limit
#[tokio::test]
async fn set_replaces_existing_limit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_budget_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let service = BudgetService::new(db);

    let first = service.set(user.id, budget(2025, 2, 50_000)).await?;
    let second = service.set(user.id, budget(2025, 2, 75_000)).await?;

    assert_eq!(first.id, second.id);
    let budgets = service.get_for_user(user.id).await?;
    assert_eq!(budgets.len(), 1);
    assert_eq!(budgets[0].limit_cents, 75_000);

    Ok(())
}

/// Tests budget validation and deleting another user's budget.
///
/// Expected: month 13 ValidationErr, foreign delete NotFound
#[tokio::test]
async fn validates_and_enforces_ownership() -> Result<(), AppError> {
    let test = TestBuilder::new().with_budget_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let service = BudgetService::new(db);

    let invalid = service.set(owner.id, budget(2025, 13, 1_000)).await;
    assert!(matches!(invalid, Err(AppError::ValidationErr(_))));

    let created = service.set(owner.id, budget(2025, 1, 1_000)).await?;
    assert!(matches!(
        service.delete(other.id, created.id).await,
        Err(AppError::NotFound(_))
    ));
    service.delete(owner.id, created.id).await?;

    Ok(())
}
