//! User service for admin user management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{PaginatedUsers, User},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all users with pagination, ordered by username.
    ///
    /// # Arguments
    /// - `page` - Zero-based page index
    /// - `per_page` - Users per page
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - Users for the requested page with pagination metadata
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn get_all_users(&self, page: u64, per_page: u64) -> Result<PaginatedUsers, AppError> {
        let per_page = per_page.max(1);
        let user_repo = UserRepository::new(self.db);

        let (users, total_items) = user_repo.get_all_paginated(page, per_page).await?;

        let total_pages = total_items.div_ceil(per_page);

        Ok(PaginatedUsers {
            users,
            total: total_items,
            page,
            per_page,
            total_pages,
        })
    }

    /// Grants or revokes admin privileges.
    ///
    /// Admins cannot revoke their own flag.
    ///
    /// # Arguments
    /// - `acting_user` - Admin performing the change
    /// - `user_id` - Target user
    /// - `is_admin` - New admin status
    ///
    /// # Returns
    /// - `Ok(User)` - Target user with updated status
    /// - `Err(AppError::BadRequest)` - Admin tried to revoke their own privileges
    /// - `Err(AppError::NotFound)` - Target user does not exist
    pub async fn set_admin(
        &self,
        acting_user: &User,
        user_id: i32,
        is_admin: bool,
    ) -> Result<User, AppError> {
        if !is_admin && acting_user.id == user_id {
            return Err(AppError::BadRequest(
                "You cannot revoke your own admin privileges".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);

        let Some(mut user) = user_repo.find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        user_repo.set_admin(user_id, is_admin).await?;
        user.admin = is_admin;

        tracing::info!(
            "User {} set admin={} for user {}",
            acting_user.id,
            is_admin,
            user_id
        );

        Ok(user)
    }
}
