use super::*;

/// Tests selecting to-dos that need a reminder.
///
/// Verifies that only open, dated, not yet reminded items due before the cutoff
/// are returned.
///
/// Expected: exactly the one eligible to-do
#[tokio::test]
async fn selects_only_eligible_todos() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_budget_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();

    let eligible = factory::todo::TodoFactory::new(db, user.id)
        .title("due soon")
        .due_at(now + Duration::minutes(30))
        .build()
        .await?;
    factory::todo::TodoFactory::new(db, user.id)
        .title("far away")
        .due_at(now + Duration::days(2))
        .build()
        .await?;
    factory::todo::TodoFactory::new(db, user.id)
        .title("already reminded")
        .due_at(now)
        .reminder_sent(true)
        .build()
        .await?;
    factory::todo::TodoFactory::new(db, user.id)
        .title("done")
        .due_at(now)
        .completed(true)
        .build()
        .await?;
    factory::todo::TodoFactory::new(db, user.id)
        .title("undated")
        .build()
        .await?;

    let repo = TodoRepository::new(db);
    let due = repo.get_due_for_reminder(now + Duration::hours(1)).await?;

    assert_eq!(due.len(), 1);
    assert_eq!(due[0].id, eligible.id);

    repo.mark_reminder_sent(eligible.id).await?;
    assert!(repo
        .get_due_for_reminder(now + Duration::hours(1))
        .await?
        .is_empty());

    Ok(())
}
