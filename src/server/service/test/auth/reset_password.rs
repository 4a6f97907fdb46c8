use super::*;
use crate::server::util::password;

/// Tests the full forgot/reset password flow.
///
/// Verifies that the emailed token sets a new password, clears lockout and
/// cannot be reused.
///
/// Expected: new password verifies, second reset Err(AuthError::InvalidToken)
#[tokio::test]
async fn resets_password_with_emailed_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();
    let settings = settings();
    let service = AuthService::new(db, &email, &settings);

    let user = factory::user::UserFactory::new(db)
        .email("ivy@example.com")
        .password("Secret123")
        .locked_until(Utc::now() + Duration::minutes(5))
        .build()
        .await?;

    service.forgot_password("ivy@example.com").await?;
    let token = last_link_token(&email).unwrap();

    service
        .reset_password("ivy@example.com", &token, "Changed456")
        .await?;

    let stored = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    assert!(password::verify_password("Changed456", &stored.password_hash));
    assert!(!stored.is_locked_out(Utc::now()));

    let again = service
        .reset_password("ivy@example.com", &token, "Another789")
        .await;
    assert!(matches!(
        again,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests that forgot-password stays silent for unknown addresses.
///
/// Expected: Ok(()) and no email
#[tokio::test]
async fn forgot_password_ignores_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();
    let settings = settings();

    AuthService::new(db, &email, &settings)
        .forgot_password("ghost@example.com")
        .await?;

    assert!(email.sent().is_empty());

    Ok(())
}

/// Tests that a reset email which cannot be delivered fails the request.
///
/// Expected: Err(AppError::EmailErr)
#[tokio::test]
async fn forgot_password_propagates_email_failure() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();
    let settings = settings();

    factory::user::UserFactory::new(db)
        .email("not-an-address")
        .build()
        .await?;

    let result = AuthService::new(db, &email, &settings)
        .forgot_password("not-an-address")
        .await;

    assert!(matches!(result, Err(AppError::EmailErr(_))));
    assert!(email.sent().is_empty());

    Ok(())
}

/// Tests that a weak new password is rejected before the token is checked.
///
/// Expected: Err(AppError::ValidationErr)
#[tokio::test]
async fn rejects_weak_new_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();
    let settings = settings();

    let result = AuthService::new(db, &email, &settings)
        .reset_password("ivy@example.com", "token", "short")
        .await;

    assert!(matches!(result, Err(AppError::ValidationErr(_))));

    Ok(())
}
