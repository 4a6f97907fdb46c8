use super::*;

/// Tests purging expired tokens.
///
/// Expected: only the expired token is removed
#[tokio::test]
async fn deletes_only_expired_tokens() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();

    let repo = UserTokenRepository::new(db);
    repo.create(
        user.id,
        TokenPurpose::PasswordReset,
        "old".to_string(),
        now - Duration::minutes(1),
    )
    .await?;
    repo.create(
        user.id,
        TokenPurpose::PasswordReset,
        "fresh".to_string(),
        now + Duration::minutes(59),
    )
    .await?;

    let removed = repo.delete_expired(now).await?;

    assert_eq!(removed, 1);
    assert!(repo
        .find_valid(user.id, TokenPurpose::PasswordReset, "fresh", now)
        .await?
        .is_some());

    Ok(())
}

/// Tests removing all tokens of one purpose for a user.
///
/// Expected: reset tokens removed, confirmation token kept
#[tokio::test]
async fn deletes_tokens_for_purpose() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let expires = Utc::now() + Duration::hours(1);

    let repo = UserTokenRepository::new(db);
    repo.create(user.id, TokenPurpose::PasswordReset, "a".to_string(), expires)
        .await?;
    repo.create(user.id, TokenPurpose::PasswordReset, "b".to_string(), expires)
        .await?;
    repo.create(
        user.id,
        TokenPurpose::EmailConfirmation,
        "c".to_string(),
        expires,
    )
    .await?;

    assert_eq!(
        repo.delete_for_user(user.id, TokenPurpose::PasswordReset)
            .await?,
        2
    );
    assert!(repo
        .find_valid(user.id, TokenPurpose::EmailConfirmation, "c", Utc::now())
        .await?
        .is_some());

    Ok(())
}
