//! SeaORM entity models for the Pricebook schema.
//!
//! Each module mirrors one table created by the `migration` crate. Money columns are
//! stored as integer cents.

pub mod prelude;

pub mod expense;
pub mod monthly_budget;
pub mod notification;
pub mod price;
pub mod product;
pub mod recovery_code;
pub mod store;
pub mod todo_item;
pub mod tracked_product;
pub mod user;
pub mod user_token;
