use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository inserts a user with the given credentials, two-factor
/// disabled and no lockout state.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hash".to_string(),
            admin: false,
            email_confirmed: false,
        })
        .await?;

    assert_eq!(user.username, "alice");
    assert!(!user.email_confirmed);
    assert!(!user.two_factor_enabled);
    assert_eq!(user.access_failed_count, 0);
    assert!(user.lockout_end.is_none());

    let found = repo.find_by_id(user.id).await?;
    assert_eq!(found, Some(user));

    Ok(())
}

/// Tests the unique constraint on usernames.
///
/// Expected: Err on second insert with the same username
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            username: "alice".to_string(),
            email: "other@example.com".to_string(),
            password_hash: "hash".to_string(),
            admin: false,
            email_confirmed: true,
        })
        .await;

    assert!(result.is_err());
    assert!(repo.username_exists("alice").await?);

    Ok(())
}

/// Tests admin detection used at startup.
///
/// Expected: false with only regular users, true once an admin exists
#[tokio::test]
async fn detects_admin_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    factory::create_user(db).await?;
    assert!(!repo.admin_exists().await?);

    factory::user::UserFactory::new(db).admin(true).build().await?;
    assert!(repo.admin_exists().await?);

    Ok(())
}
