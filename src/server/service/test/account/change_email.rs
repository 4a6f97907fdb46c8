use super::*;

/// Tests changing email unconfirms the account and sends a new confirmation.
///
/// Expected: new lowercased email, email_confirmed=false, one email to the new address
#[tokio::test]
async fn changes_email_and_requires_confirmation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();
    let settings = settings();
    let user = create_user(db, "liam@example.com").await?;

    let updated = AccountService::new(db, &email, &settings)
        .change_email(&user, "Liam.New@Example.com")
        .await?;

    assert_eq!(updated.email, "liam.new@example.com");
    assert!(!updated.email_confirmed);

    let sent = email.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "liam.new@example.com");

    Ok(())
}

/// Tests that another user's address and the current address are refused.
///
/// Expected: Conflict for a taken address, BadRequest for the same address
#[tokio::test]
async fn rejects_taken_or_unchanged_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();
    let settings = settings();
    let service = AccountService::new(db, &email, &settings);

    let user = create_user(db, "mia@example.com").await?;
    create_user(db, "noah@example.com").await?;

    let taken = service.change_email(&user, "noah@example.com").await;
    assert!(matches!(taken, Err(AppError::Conflict(_))));

    let unchanged = service.change_email(&user, "mia@example.com").await;
    assert!(matches!(unchanged, Err(AppError::BadRequest(_))));

    assert!(email.sent().is_empty());

    Ok(())
}
