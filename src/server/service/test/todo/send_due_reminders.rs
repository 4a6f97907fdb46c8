use super::*;

/// Tests reminders for to-dos due within the lead time.
///
/// Verifies that a to-do due soon gets a notification and an email, while one due
/// later, a completed one and an already reminded one are skipped. A second run
/// sends nothing.
///
/// Expected: one reminder on the first run, zero on the second
#[tokio::test]
async fn reminds_once_for_due_todos() -> Result<(), AppError> {
    let test = TestBuilder::new().with_budget_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();
    let user = factory::create_user(db).await?;
    let now = Utc::now();

    let due_soon = factory::todo::TodoFactory::new(db, user.id)
        .title("Pay rent")
        .due_at(now + Duration::minutes(30))
        .build()
        .await?;
    factory::todo::TodoFactory::new(db, user.id)
        .due_at(now + Duration::days(3))
        .build()
        .await?;
    factory::todo::TodoFactory::new(db, user.id)
        .due_at(now)
        .completed(true)
        .build()
        .await?;
    factory::todo::TodoFactory::new(db, user.id)
        .due_at(now)
        .reminder_sent(true)
        .build()
        .await?;

    let service = TodoService::new(db);
    let sent = service
        .send_due_reminders(&email, now, Duration::minutes(60))
        .await?;
    assert_eq!(sent, 1);

    let notifications = NotificationRepository::new(db)
        .get_for_user(user.id, false)
        .await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, "todo_due");
    assert_eq!(notifications[0].todo_item_id, Some(due_soon.id));

    let emails = email.sent();
    assert_eq!(emails.len(), 1);
    assert!(matches!(
        &emails[0].template,
        EmailTemplate::TodoReminder { title, .. } if title == "Pay rent"
    ));

    let again = service
        .send_due_reminders(&email, now, Duration::minutes(60))
        .await?;
    assert_eq!(again, 0);

    Ok(())
}
