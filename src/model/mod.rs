//! Data transfer objects exchanged with API clients.
//!
//! These types define the JSON request and response bodies. They are deliberately free
//! of server logic; the server converts between them and its domain models at the
//! controller boundary.

pub mod api;
pub mod catalog;
pub mod expense;
pub mod price;
pub mod todo;
pub mod two_factor;
pub mod user;
