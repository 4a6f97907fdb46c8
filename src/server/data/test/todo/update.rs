use super::*;

/// Tests that moving the due date re-arms the reminder.
///
/// Expected: reminder_sent false after due_at changes
#[tokio::test]
async fn resets_reminder_when_due_changes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_budget_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let due = Utc::now() + Duration::hours(1);
    let todo = factory::todo::TodoFactory::new(db, user.id)
        .due_at(due)
        .reminder_sent(true)
        .build()
        .await?;

    let repo = TodoRepository::new(db);
    let updated = repo
        .update(
            todo.id,
            user.id,
            TodoParams {
                title: todo.title.clone(),
                description: None,
                due_at: Some(due + Duration::days(1)),
            },
        )
        .await?
        .unwrap();

    assert!(!updated.reminder_sent);

    Ok(())
}

/// Tests that editing other fields leaves the reminder flag alone.
///
/// Expected: reminder_sent still true
#[tokio::test]
async fn keeps_reminder_when_due_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_budget_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let todo = factory::todo::TodoFactory::new(db, user.id)
        .due_at(Utc::now())
        .reminder_sent(true)
        .build()
        .await?;

    let updated = TodoRepository::new(db)
        .update(
            todo.id,
            user.id,
            TodoParams {
                title: "Renamed".to_string(),
                description: Some("details".to_string()),
                due_at: todo.due_at,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert!(updated.reminder_sent);

    Ok(())
}
