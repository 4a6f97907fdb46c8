//! Two-factor authentication domain models.

use crate::model::two_factor::{AuthenticatorSetupDto, RecoveryCodesDto, TwoFactorStatusDto};

#[derive(Debug, Clone, PartialEq)]
pub struct TwoFactorStatus {
    pub enabled: bool,
    pub has_authenticator: bool,
    pub recovery_codes_left: u64,
}

impl TwoFactorStatus {
    pub fn into_dto(self) -> TwoFactorStatusDto {
        TwoFactorStatusDto {
            enabled: self.enabled,
            has_authenticator: self.has_authenticator,
            recovery_codes_left: self.recovery_codes_left,
        }
    }
}

/// What an authenticator app needs to enrol: the key and its provisioning URI.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatorSetup {
    pub shared_key: String,
    pub authenticator_uri: String,
}

impl AuthenticatorSetup {
    pub fn into_dto(self) -> AuthenticatorSetupDto {
        AuthenticatorSetupDto {
            shared_key: self.shared_key,
            authenticator_uri: self.authenticator_uri,
        }
    }
}

/// Plaintext recovery codes, returned exactly once after generation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecoveryCodes(pub Vec<String>);

impl RecoveryCodes {
    pub fn into_dto(self) -> RecoveryCodesDto {
        RecoveryCodesDto {
            recovery_codes: self.0,
        }
    }
}
