use super::*;

/// Tests login lookup by username.
///
/// Expected: Ok(Some) for exact username
#[tokio::test]
async fn finds_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("bob")
        .email("bob@example.com")
        .build()
        .await?;

    let found = UserRepository::new(db).find_by_login("bob").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests login lookup by email regardless of case.
///
/// Expected: Ok(Some) for differently cased email
#[tokio::test]
async fn finds_by_email_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("carol@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_login(" Carol@Example.COM ").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    let by_email = repo.find_by_email("CAROL@example.com").await?;
    assert_eq!(by_email.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests unknown logins.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_login() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    assert!(UserRepository::new(db)
        .find_by_login("nobody")
        .await?
        .is_none());

    Ok(())
}
