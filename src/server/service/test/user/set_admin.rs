use super::*;

/// Tests granting and revoking admin on another user.
///
/// Expected: admin flag follows the request
#[tokio::test]
async fn grants_and_revokes_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = User::from_entity(factory::user::UserFactory::new(db).admin(true).build().await?);
    let other = factory::create_user(db).await?;
    let service = UserService::new(db);

    let granted = service.set_admin(&admin, other.id, true).await?;
    assert!(granted.admin);

    let revoked = service.set_admin(&admin, other.id, false).await?;
    assert!(!revoked.admin);

    Ok(())
}

/// Tests that admins cannot revoke their own flag and unknown users are 404.
///
/// Expected: BadRequest for self-revoke, NotFound for a missing user
#[tokio::test]
async fn rejects_self_revoke_and_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = User::from_entity(factory::user::UserFactory::new(db).admin(true).build().await?);
    let service = UserService::new(db);

    let self_revoke = service.set_admin(&admin, admin.id, false).await;
    assert!(matches!(self_revoke, Err(AppError::BadRequest(_))));

    let missing = service.set_admin(&admin, admin.id + 1000, true).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}
