use super::*;

/// Tests confirming an email address with the emailed token.
///
/// Verifies that the token works once and is consumed afterwards.
///
/// Expected: email_confirmed=true, second use Err(AuthError::InvalidToken)
#[tokio::test]
async fn confirms_with_emailed_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();
    let settings = settings();
    let service = AuthService::new(db, &email, &settings);

    let user = service
        .register(
            register_params("erin", "erin@example.com"),
            &AdminCodeService::new(),
        )
        .await?;
    let token = last_link_token(&email).unwrap();

    service.confirm_email(user.id, &token).await?;

    let stored = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    assert!(stored.email_confirmed);

    let again = service.confirm_email(user.id, &token).await;
    assert!(matches!(
        again,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests that a token issued to one user cannot confirm another.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_token_for_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();
    let settings = settings();
    let service = AuthService::new(db, &email, &settings);
    let admin_codes = AdminCodeService::new();

    service
        .register(register_params("frank", "frank@example.com"), &admin_codes)
        .await?;
    let token = last_link_token(&email).unwrap();
    let other = service
        .register(register_params("grace", "grace@example.com"), &admin_codes)
        .await?;

    let result = service.confirm_email(other.id, &token).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests that resending only emails unconfirmed accounts.
///
/// Expected: no email for unknown or confirmed addresses, one for unconfirmed
#[tokio::test]
async fn resends_only_to_unconfirmed_accounts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();
    let settings = settings();
    let service = AuthService::new(db, &email, &settings);

    factory::user::UserFactory::new(db)
        .email("confirmed@example.com")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .email("pending@example.com")
        .email_confirmed(false)
        .build()
        .await?;

    service.resend_confirmation("nobody@example.com").await?;
    service.resend_confirmation("confirmed@example.com").await?;
    assert!(email.sent().is_empty());

    service.resend_confirmation("pending@example.com").await?;
    let sent = email.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "pending@example.com");

    Ok(())
}
