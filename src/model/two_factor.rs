use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TwoFactorStatusDto {
    pub enabled: bool,
    pub has_authenticator: bool,
    pub recovery_codes_left: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatorSetupDto {
    /// Key formatted for manual entry, e.g. `abcd efgh ...`.
    pub shared_key: String,
    pub authenticator_uri: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EnableTwoFactorDto {
    pub code: String,
}

/// Freshly generated recovery codes. Shown once; only hashes are kept server side.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecoveryCodesDto {
    pub recovery_codes: Vec<String>,
}
