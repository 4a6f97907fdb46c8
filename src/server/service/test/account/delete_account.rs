use super::*;

/// Tests deleting an account after password confirmation.
///
/// Expected: wrong password refused, correct password removes the user
#[tokio::test]
async fn deletes_account_with_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();
    let settings = settings();
    let service = AccountService::new(db, &email, &settings);
    let user = create_user(db, "olivia@example.com").await?;

    let refused = service.delete_account(&user, "Wrong1234").await;
    assert!(matches!(
        refused,
        Err(AppError::AuthErr(AuthError::IncorrectPassword))
    ));
    assert!(UserRepository::new(db).find_by_id(user.id).await?.is_some());

    service.delete_account(&user, "Secret123").await?;
    assert!(UserRepository::new(db).find_by_id(user.id).await?.is_none());

    Ok(())
}
