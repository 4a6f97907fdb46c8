use super::*;

/// Tests completing a to-do and filtering by completion.
///
/// Expected: completed_at set once, filters split the list
#[tokio::test]
async fn completes_todo() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_budget_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let todo = factory::create_todo(db, user.id).await?;
    factory::create_todo(db, user.id).await?;

    let repo = TodoRepository::new(db);
    let first_time = Utc::now();
    let completed = repo.complete(todo.id, user.id, first_time).await?.unwrap();
    assert!(completed.completed);

    let again = repo
        .complete(todo.id, user.id, first_time + Duration::hours(1))
        .await?
        .unwrap();
    assert_eq!(again.completed_at, completed.completed_at);

    assert_eq!(repo.get_for_user(user.id, Some(true)).await?.len(), 1);
    assert_eq!(repo.get_for_user(user.id, Some(false)).await?.len(), 1);
    assert_eq!(repo.get_for_user(user.id, None).await?.len(), 2);

    Ok(())
}

/// Tests ownership on completion.
///
/// Expected: Ok(None) for another user's to-do
#[tokio::test]
async fn cannot_complete_other_users_todo() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_budget_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let todo = factory::create_todo(db, owner.id).await?;

    assert!(TodoRepository::new(db)
        .complete(todo.id, other.id, Utc::now())
        .await?
        .is_none());

    Ok(())
}
