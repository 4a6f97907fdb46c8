//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services validate input
//! through the builders in `validation`, coordinate repository calls, and raise
//! notifications and emails as side effects. They work with domain models rather
//! than DTOs or entity models.

pub mod account;
pub mod admin;
pub mod auth;
pub mod budget;
pub mod email;
pub mod expense;
pub mod notification;
pub mod price;
pub mod product;
pub mod store;
pub mod todo;
pub mod tracking;
pub mod two_factor;
pub mod user;

#[cfg(test)]
mod test;
