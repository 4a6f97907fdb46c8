use url::Url;

use crate::server::{
    config::AuthSettings,
    service::email::{template::EmailTemplate, EmailService},
};

mod account;
mod auth;
mod expense;
mod price;
mod product;
mod store;
mod todo;
mod tracking;
mod two_factor;

/// Authenticator key shared by two-factor tests.
const TEST_AUTHENTICATOR_KEY: &str = "JBSWY3DPEHPK3PXPJBSWY3DPEHPK3PXP";

fn settings() -> AuthSettings {
    AuthSettings {
        app_url: "http://localhost:8080".to_string(),
        require_confirmed_email: true,
        two_factor_issuer: "Pricebook".to_string(),
    }
}

/// Pulls the `token` query parameter out of the last emailed link.
fn last_link_token(email: &EmailService) -> Option<String> {
    let link = match email.sent().pop()?.template {
        EmailTemplate::ConfirmEmail { link, .. } | EmailTemplate::PasswordReset { link, .. } => {
            link
        }
        _ => return None,
    };

    Url::parse(&link)
        .ok()?
        .query_pairs()
        .find(|(key, _)| key == "token")
        .map(|(_, value)| value.into_owned())
}
