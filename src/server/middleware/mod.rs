//! Request guards and typed session access used by the controllers.

pub mod auth;
pub mod session;
