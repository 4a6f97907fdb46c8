use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Expense};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Expense)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables used by authentication and account management:
    /// User, UserToken, RecoveryCode.
    pub fn with_user_tables(self) -> Self {
        self.with_table(User)
            .with_table(UserToken)
            .with_table(RecoveryCode)
    }

    /// Adds the tables used by the store/product/price catalog and price tracking:
    /// User, Store, Product, Price, TrackedProduct, TodoItem, Notification.
    ///
    /// Notification tables are included because recording a price can raise alerts.
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(User)
            .with_table(Store)
            .with_table(Product)
            .with_table(Price)
            .with_table(TrackedProduct)
            .with_table(TodoItem)
            .with_table(Notification)
    }

    /// Adds the tables used by expenses, budgets, to-dos and notifications:
    /// User, Expense, MonthlyBudget, TodoItem, Notification.
    pub fn with_budget_tables(self) -> Self {
        self.with_table(User)
            .with_table(Expense)
            .with_table(MonthlyBudget)
            .with_table(TodoItem)
            .with_table(Notification)
    }

    /// Adds every table in the schema in dependency order.
    pub fn with_all_tables(self) -> Self {
        self.with_table(User)
            .with_table(UserToken)
            .with_table(RecoveryCode)
            .with_table(Store)
            .with_table(Product)
            .with_table(Price)
            .with_table(TrackedProduct)
            .with_table(Expense)
            .with_table(MonthlyBudget)
            .with_table(TodoItem)
            .with_table(Notification)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
