//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, credential and lockout updates, two-factor state, queries and
//! admin status management with conversion between entity models and domain models at the
//! infrastructure boundary.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParams, User};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and querying user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// Uniqueness of username and email is checked by the caller beforehand; a race that
    /// slips past that check surfaces here as a unique constraint `DbErr`.
    ///
    /// # Arguments
    /// - `params` - Validated user fields with the password already hashed
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            email_confirmed: ActiveValue::Set(params.email_confirmed),
            admin: ActiveValue::Set(params.admin),
            two_factor_enabled: ActiveValue::Set(false),
            authenticator_key: ActiveValue::Set(None),
            access_failed_count: ActiveValue::Set(0),
            lockout_end: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email address (stored lowercased).
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email.to_lowercase()))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user whose username or email equals the login string.
    ///
    /// Usernames match exactly; emails match case-insensitively since they are stored
    /// lowercased.
    ///
    /// # Arguments
    /// - `login` - Username or email address as typed by the user
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Matching user
    /// - `Ok(None)` - No user matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_login(&self, login: &str) -> Result<Option<User>, DbErr> {
        let login = login.trim();

        let entity = entity::prelude::User::find()
            .filter(
                Condition::any()
                    .add(entity::user::Column::Username.eq(login))
                    .add(entity::user::Column::Email.eq(login.to_lowercase())),
            )
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Checks whether a username is taken.
    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether an email is taken by any user other than `except_user_id`.
    ///
    /// # Arguments
    /// - `email` - Lowercased email address
    /// - `except_user_id` - User to ignore (the one changing their email), if any
    pub async fn email_exists(
        &self,
        email: &str,
        except_user_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Email.eq(email));

        if let Some(user_id) = except_user_id {
            query = query.filter(entity::user::Column::Id.ne(user_id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used at startup to decide whether an admin bootstrap code is needed.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin user exists in the database
    /// - `Ok(false)` - No admin users exist (first-time setup scenario)
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Admin.eq(true))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Gets all users with pagination.
    ///
    /// Returns a paginated list of all users ordered alphabetically by username.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users to return per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and total user count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Username)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let users = entities.into_iter().map(User::from_entity).collect();

        Ok((users, total))
    }

    /// Sets admin status for a user.
    ///
    /// # Returns
    /// - `Ok(())` - Admin status updated successfully (or no matching user found)
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn set_admin(&self, user_id: i32, is_admin: bool) -> Result<(), DbErr> {
        self.update_column(user_id, entity::user::Column::Admin, is_admin)
            .await
    }

    /// Stores the outcome of a failed sign-in attempt.
    ///
    /// # Arguments
    /// - `user_id` - User who failed to sign in
    /// - `access_failed_count` - New consecutive failure count
    /// - `lockout_end` - Lockout expiry when the failure triggered a lockout
    pub async fn record_failed_access(
        &self,
        user_id: i32,
        access_failed_count: i32,
        lockout_end: Option<DateTime<Utc>>,
    ) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::AccessFailedCount,
                Expr::value(access_failed_count),
            )
            .col_expr(entity::user::Column::LockoutEnd, Expr::value(lockout_end))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Clears the failure counter and any lockout after a successful sign-in.
    pub async fn reset_access_failed(&self, user_id: i32) -> Result<(), DbErr> {
        self.record_failed_access(user_id, 0, None).await
    }

    /// Replaces the password hash and lifts any lockout.
    pub async fn update_password(&self, user_id: i32, password_hash: String) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(entity::user::Column::PasswordHash, Expr::value(password_hash))
            .col_expr(entity::user::Column::AccessFailedCount, Expr::value(0))
            .col_expr(
                entity::user::Column::LockoutEnd,
                Expr::value(Option::<DateTime<Utc>>::None),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn set_email_confirmed(&self, user_id: i32, confirmed: bool) -> Result<(), DbErr> {
        self.update_column(user_id, entity::user::Column::EmailConfirmed, confirmed)
            .await
    }

    /// Changes the email address and marks it unconfirmed.
    pub async fn update_email(&self, user_id: i32, email: String) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(entity::user::Column::Email, Expr::value(email))
            .col_expr(entity::user::Column::EmailConfirmed, Expr::value(false))
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn set_two_factor_enabled(&self, user_id: i32, enabled: bool) -> Result<(), DbErr> {
        self.update_column(user_id, entity::user::Column::TwoFactorEnabled, enabled)
            .await
    }

    /// Stores a new base32 authenticator key.
    pub async fn set_authenticator_key(&self, user_id: i32, key: String) -> Result<(), DbErr> {
        self.update_column(user_id, entity::user::Column::AuthenticatorKey, Some(key))
            .await
    }

    /// Deletes a user. Tokens, codes, expenses, budgets, to-dos, tracking and
    /// notifications go with it through cascading foreign keys.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that ID
    pub async fn delete(&self, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn update_column<V>(
        &self,
        user_id: i32,
        column: entity::user::Column,
        value: V,
    ) -> Result<(), DbErr>
    where
        V: Into<sea_orm::Value>,
    {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(column, Expr::value(value))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
