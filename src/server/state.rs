//! Application state shared across all request handlers.
//!
//! `AppState` is built once at startup and cloned into every handler through Axum's
//! state extraction. Every field is cheap to clone: the database connection is a pool
//! handle, and the email and admin code services share their internals through `Arc`.

use sea_orm::DatabaseConnection;

use super::{
    config::AuthSettings,
    service::{admin::code::AdminCodeService, email::EmailService},
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Outgoing mail for confirmation, reset and notification emails.
    pub email: EmailService,

    /// One-time code letting the first registration become admin.
    pub admin_code_service: AdminCodeService,

    /// Settings read by the authentication services.
    pub auth_settings: AuthSettings,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        email: EmailService,
        admin_code_service: AdminCodeService,
        auth_settings: AuthSettings,
    ) -> Self {
        Self {
            db,
            email,
            admin_code_service,
            auth_settings,
        }
    }
}
