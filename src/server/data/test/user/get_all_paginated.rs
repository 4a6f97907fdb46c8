use super::*;

/// Tests paginated user listing.
///
/// Verifies that users are ordered by username and the total counts every user,
/// not the number of pages.
///
/// Expected: Ok with 2 users on page 0 and total 3
#[tokio::test]
async fn paginates_users_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["charlie", "alice", "bob"] {
        factory::user::UserFactory::new(db)
            .username(name)
            .email(format!("{}@example.com", name))
            .build()
            .await?;
    }

    let repo = UserRepository::new(db);
    let (first, total) = repo.get_all_paginated(0, 2).await?;
    let (second, _) = repo.get_all_paginated(1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(
        first.iter().map(|u| u.username.as_str()).collect::<Vec<_>>(),
        vec!["alice", "bob"]
    );
    assert_eq!(second[0].username, "charlie");

    Ok(())
}
