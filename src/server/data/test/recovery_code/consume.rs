use super::*;

/// Tests that a recovery code works exactly once.
///
/// Expected: first consume true, second false, unused count drops
#[tokio::test]
async fn consumes_code_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = RecoveryCodeRepository::new(db);
    repo.replace_all(user.id, vec!["hash-1".into(), "hash-2".into()])
        .await?;

    assert!(repo.consume(user.id, "hash-1", Utc::now()).await?);
    assert!(!repo.consume(user.id, "hash-1", Utc::now()).await?);
    assert_eq!(repo.count_unused(user.id).await?, 1);

    Ok(())
}

/// Tests that codes are scoped to their user.
///
/// Expected: another user's code is not consumed
#[tokio::test]
async fn does_not_consume_other_users_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let repo = RecoveryCodeRepository::new(db);
    repo.replace_all(owner.id, vec!["shared".into()]).await?;

    assert!(!repo.consume(other.id, "shared", Utc::now()).await?);
    assert_eq!(repo.count_unused(owner.id).await?, 1);

    Ok(())
}
