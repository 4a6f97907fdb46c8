use super::*;

/// Tests changing the password with the correct current password.
///
/// Expected: the new password verifies
#[tokio::test]
async fn changes_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();
    let settings = settings();
    let user = create_user(db, "jack@example.com").await?;

    AccountService::new(db, &email, &settings)
        .change_password(&user, "Secret123", "Changed456")
        .await?;

    let stored = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    assert!(password::verify_password("Changed456", &stored.password_hash));

    Ok(())
}

/// Tests that the current password must verify.
///
/// Expected: Err(AuthError::IncorrectPassword)
#[tokio::test]
async fn rejects_wrong_current_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();
    let settings = settings();
    let user = create_user(db, "kate@example.com").await?;

    let result = AccountService::new(db, &email, &settings)
        .change_password(&user, "Wrong1234", "Changed456")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::IncorrectPassword))
    ));

    Ok(())
}
