use super::*;

/// Tests changing a user's email.
///
/// Verifies the address changes and the confirmation flag is cleared.
///
/// Expected: Ok with new email and email_confirmed false
#[tokio::test]
async fn updates_email_and_clears_confirmation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    assert!(user.email_confirmed);

    let repo = UserRepository::new(db);
    repo.update_email(user.id, "new@example.com".to_string())
        .await?;

    let updated = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(updated.email, "new@example.com");
    assert!(!updated.email_confirmed);

    Ok(())
}

/// Tests the email uniqueness check used when changing email.
///
/// Expected: the user's own address does not count as taken
#[tokio::test]
async fn email_exists_ignores_own_address() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("dave@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    assert!(repo.email_exists("dave@example.com", None).await?);
    assert!(!repo.email_exists("dave@example.com", Some(user.id)).await?);

    Ok(())
}
