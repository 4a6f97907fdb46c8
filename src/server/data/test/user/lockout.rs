use super::*;

/// Tests recording a failed attempt with a lockout.
///
/// Expected: counter and lockout end persisted
#[tokio::test]
async fn records_failed_access() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let lockout_end = Utc::now() + Duration::minutes(5);

    let repo = UserRepository::new(db);
    repo.record_failed_access(user.id, 0, Some(lockout_end))
        .await?;

    let updated = repo.find_by_id(user.id).await?.unwrap();
    assert!(updated.is_locked_out(Utc::now()));
    assert!(!updated.is_locked_out(lockout_end + Duration::seconds(1)));

    Ok(())
}

/// Tests that a password change lifts any lockout.
///
/// Expected: new hash stored, counter 0, no lockout
#[tokio::test]
async fn update_password_clears_lockout() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .access_failed_count(3)
        .locked_until(Utc::now() + Duration::minutes(5))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.update_password(user.id, "new-hash".to_string())
        .await?;

    let updated = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(updated.password_hash, "new-hash");
    assert_eq!(updated.access_failed_count, 0);
    assert!(updated.lockout_end.is_none());

    Ok(())
}
