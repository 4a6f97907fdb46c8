//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.
//!
//! The catalog repositories (store, product, price) are generic over `ConnectionTrait` so
//! the seeder can run them inside a single transaction.

pub mod budget;
pub mod expense;
pub mod notification;
pub mod price;
pub mod product;
pub mod recovery_code;
pub mod store;
pub mod todo;
pub mod tracked_product;
pub mod user;
pub mod user_token;

#[cfg(test)]
mod test;
