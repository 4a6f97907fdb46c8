//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults, reducing boilerplate in tests. Each entity
//! has its own module with a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let (store, product, price) = factory::helpers::create_price_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .username("alice")
//!     .password("Secret123")
//!     .admin(true)
//!     .build()
//!     .await?;
//! ```

pub mod budget;
pub mod expense;
pub mod helpers;
pub mod price;
pub mod product;
pub mod store;
pub mod todo;
pub mod user;

pub use budget::create_budget;
pub use expense::create_expense;
pub use price::create_price;
pub use product::create_product;
pub use store::create_store;
pub use todo::create_todo;
pub use user::{create_user, create_user_with_password};
