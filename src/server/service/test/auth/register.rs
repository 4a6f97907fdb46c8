use super::*;

/// Tests registering a new account.
///
/// Verifies that the user is stored unconfirmed and non-admin and that a
/// confirmation email is sent to the new address.
///
/// Expected: Ok(User) and one ConfirmEmail message
#[tokio::test]
async fn registers_user_and_sends_confirmation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();
    let settings = settings();

    let user = AuthService::new(db, &email, &settings)
        .register(
            register_params("alice", "alice@example.com"),
            &AdminCodeService::new(),
        )
        .await?;

    assert_eq!(user.username, "alice");
    assert!(!user.email_confirmed);
    assert!(!user.admin);
    assert_ne!(user.password_hash, "Secret123");

    let sent = email.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "alice@example.com");
    assert!(matches!(sent[0].template, EmailTemplate::ConfirmEmail { .. }));

    Ok(())
}

/// Tests that a valid admin code makes the new user an admin and is consumed.
///
/// Expected: admin=true, code no longer valid
#[tokio::test]
async fn grants_admin_with_valid_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();
    let settings = settings();
    let admin_codes = AdminCodeService::new();
    let code = admin_codes.generate().await;

    let mut params = register_params("root", "root@example.com");
    params.admin_code = Some(code.clone());

    let user = AuthService::new(db, &email, &settings)
        .register(params, &admin_codes)
        .await?;

    assert!(user.admin);
    assert!(!admin_codes.validate_and_consume(&code).await);

    Ok(())
}

/// Tests that an invalid admin code still registers a regular user.
///
/// Expected: Ok(User) with admin=false
#[tokio::test]
async fn ignores_invalid_admin_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();
    let settings = settings();

    let mut params = register_params("bob", "bob@example.com");
    params.admin_code = Some("not-the-code".to_string());

    let user = AuthService::new(db, &email, &settings)
        .register(params, &AdminCodeService::new())
        .await?;

    assert!(!user.admin);

    Ok(())
}

/// Tests duplicate username and email detection.
///
/// Expected: Err(AppError::Conflict) for both
#[tokio::test]
async fn rejects_duplicate_username_and_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();
    let settings = settings();
    let service = AuthService::new(db, &email, &settings);
    let admin_codes = AdminCodeService::new();

    service
        .register(register_params("carol", "carol@example.com"), &admin_codes)
        .await?;

    let same_name = service
        .register(register_params("carol", "other@example.com"), &admin_codes)
        .await;
    assert!(matches!(same_name, Err(AppError::Conflict(_))));

    let same_email = service
        .register(register_params("carol2", "CAROL@example.com"), &admin_codes)
        .await;
    assert!(matches!(same_email, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that weak passwords are rejected before anything is stored.
///
/// Expected: Err(AppError::ValidationErr) on the password field, no email sent
#[tokio::test]
async fn rejects_weak_password() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = EmailService::capture();
    let settings = settings();

    let mut params = register_params("dave", "dave@example.com");
    params.password = "password".to_string();

    let result = AuthService::new(db, &email, &settings)
        .register(params, &AdminCodeService::new())
        .await;

    match result {
        Err(AppError::ValidationErr(err)) => assert_eq!(err.field, "password"),
        other => panic!("Expected ValidationErr, got: {:?}", other.map(|u| u.id)),
    }
    assert!(email.sent().is_empty());
    assert!(!UserRepository::new(db).username_exists("dave").await?);

    Ok(())
}
