use super::*;

/// Tests setting up an authenticator and enabling 2FA with its code.
///
/// Verifies that setup creates and keeps a key, enable returns fresh recovery codes,
/// and the user is told by email.
///
/// Expected: 2FA enabled, RECOVERY_CODE_COUNT codes, TwoFactorEnabled email
#[tokio::test]
async fn enables_with_valid_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();
    let settings = settings();
    let service = TwoFactorService::new(db, &email, &settings);

    let user = User::from_entity(factory::create_user(db).await?);

    let setup = service.authenticator_setup(&user).await?;
    assert!(setup.authenticator_uri.starts_with("otpauth://totp/Pricebook:"));

    let user = reload(db, user.id).await?;
    let key = user.authenticator_key.clone().unwrap();
    let again = service.authenticator_setup(&user).await?;
    assert_eq!(again.shared_key, setup.shared_key);

    let code = totp::generate_code(&key, totp::unix_seconds(Utc::now())).unwrap();
    let codes = service.enable(&user, &code).await?;

    assert_eq!(codes.0.len(), RECOVERY_CODE_COUNT);
    let user = reload(db, user.id).await?;
    assert!(user.two_factor_enabled);

    let status = service.status(&user).await?;
    assert!(status.enabled);
    assert_eq!(status.recovery_codes_left, RECOVERY_CODE_COUNT as u64);

    assert!(email
        .sent()
        .iter()
        .any(|sent| matches!(sent.template, EmailTemplate::TwoFactorEnabled { .. })));

    Ok(())
}

/// Tests that enabling needs a verified code and an existing key.
///
/// Expected: BadRequest without a key, InvalidTwoFactorCode for a wrong code
#[tokio::test]
async fn rejects_enable_without_key_or_with_bad_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();
    let settings = settings();
    let service = TwoFactorService::new(db, &email, &settings);

    let keyless = User::from_entity(factory::create_user(db).await?);
    let result = service.enable(&keyless, "123456").await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let mut with_key = keyless.clone();
    with_key.authenticator_key = Some(TEST_AUTHENTICATOR_KEY.to_string());
    let result = service.enable(&with_key, "12345").await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidTwoFactorCode))
    ));

    assert!(!reload(db, keyless.id).await?.two_factor_enabled);

    Ok(())
}
