//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types are produced by the builder validators in `server::validation`, so a
//! params value is always already validated.

pub mod catalog;
pub mod expense;
pub mod notification;
pub mod price;
pub mod todo;
pub mod two_factor;
pub mod user;
