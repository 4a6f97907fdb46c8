//! Small self-contained helpers shared by services and controllers.

pub mod crypto;
pub mod money;
pub mod password;
pub mod totp;
