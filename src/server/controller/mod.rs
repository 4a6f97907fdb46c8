//! HTTP request handlers.
//!
//! Controllers authenticate the caller through `AuthGuard`, convert request DTOs into
//! builders or params, call a service and convert the returned domain model back into
//! a response DTO. Each module exposes a tag for grouping its endpoints in the OpenAPI
//! document.

use serde::Deserialize;

pub mod account;
pub mod admin;
pub mod auth;
pub mod budget;
pub mod expense;
pub mod notification;
pub mod price;
pub mod product;
pub mod store;
pub mod todo;
pub mod tracking;
pub mod two_factor;

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}
