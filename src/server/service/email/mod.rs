//! Outgoing email.
//!
//! `EmailService` renders an `EmailTemplate` and delivers it as a multipart
//! plain-text/HTML message through lettre's async SMTP transport. Without SMTP
//! configuration the service runs disabled and only logs what it would have sent.

pub mod template;

use std::sync::Arc;

use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::server::{config::SmtpConfig, error::email::EmailError};

use self::template::{EmailTemplate, RenderedEmail};

enum Delivery {
    Smtp {
        transport: AsyncSmtpTransport<Tokio1Executor>,
        from: Mailbox,
    },
    Disabled,
    #[cfg(test)]
    Capture(Arc<std::sync::Mutex<Vec<SentEmail>>>),
}

/// A message recorded by the capturing service used in tests.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub template: EmailTemplate,
    pub rendered: RenderedEmail,
}

/// Cheap-to-clone handle for sending application email.
#[derive(Clone)]
pub struct EmailService {
    delivery: Arc<Delivery>,
}

impl EmailService {
    /// Builds an SMTP-backed service using a STARTTLS relay with credentials.
    ///
    /// # Arguments
    /// - `config` - Relay host, port, credentials and sender address
    ///
    /// # Returns
    /// - `Ok(EmailService)` - Service ready to send
    /// - `Err(EmailError::InvalidAddress)` - The sender address could not be parsed
    /// - `Err(EmailError::Transport)` - The relay could not be configured
    pub fn smtp(config: &SmtpConfig) -> Result<Self, EmailError> {
        let from = parse_mailbox(&config.from)?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        tracing::info!(
            "Email delivery via SMTP relay {}:{}",
            config.host,
            config.port
        );

        Ok(Self {
            delivery: Arc::new(Delivery::Smtp { transport, from }),
        })
    }

    /// Builds a service that logs messages instead of sending them.
    pub fn disabled() -> Self {
        Self {
            delivery: Arc::new(Delivery::Disabled),
        }
    }

    /// Chooses SMTP delivery when configured, otherwise the disabled service.
    pub fn from_config(config: Option<&SmtpConfig>) -> Result<Self, EmailError> {
        match config {
            Some(config) => Self::smtp(config),
            None => {
                tracing::warn!("SMTP_HOST not set, emails will be logged instead of sent");
                Ok(Self::disabled())
            }
        }
    }

    /// Renders `template` and delivers it to `to`.
    ///
    /// # Returns
    /// - `Ok(())` - Message sent (or logged when disabled)
    /// - `Err(EmailError::InvalidAddress)` - Recipient could not be parsed
    /// - `Err(EmailError::Build)` - Message could not be assembled
    /// - `Err(EmailError::Transport)` - Relay rejected the message
    pub async fn send(&self, to: &str, template: EmailTemplate) -> Result<(), EmailError> {
        let rendered = template.render();

        match self.delivery.as_ref() {
            Delivery::Smtp { transport, from } => {
                let message = Message::builder()
                    .from(from.clone())
                    .to(parse_mailbox(to)?)
                    .subject(rendered.subject.clone())
                    .multipart(MultiPart::alternative_plain_html(
                        rendered.text,
                        rendered.html,
                    ))?;

                transport.send(message).await?;

                tracing::debug!("Sent email '{}' to {}", rendered.subject, to);
            }
            Delivery::Disabled => {
                tracing::info!(
                    "Email delivery disabled; would send '{}' to {}:\n{}",
                    rendered.subject,
                    to,
                    rendered.text
                );
            }
            #[cfg(test)]
            Delivery::Capture(sent) => {
                parse_mailbox(to)?;
                if let Ok(mut sent) = sent.lock() {
                    sent.push(SentEmail {
                        to: to.to_string(),
                        template,
                        rendered,
                    });
                }
            }
        }

        Ok(())
    }

    /// Sends an email from a background flow, logging instead of failing on error.
    pub async fn send_or_log(&self, to: &str, template: EmailTemplate) {
        if let Err(e) = self.send(to, template).await {
            tracing::error!("Failed to send email to {}: {}", to, e);
        }
    }
}

#[cfg(test)]
impl EmailService {
    /// Builds a service that records every message in memory.
    pub fn capture() -> Self {
        Self {
            delivery: Arc::new(Delivery::Capture(Default::default())),
        }
    }

    /// Messages recorded so far by a capturing service.
    pub fn sent(&self) -> Vec<SentEmail> {
        match self.delivery.as_ref() {
            Delivery::Capture(sent) => sent.lock().map(|sent| sent.clone()).unwrap_or_default(),
            _ => Vec::new(),
        }
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, EmailError> {
    address
        .parse::<Mailbox>()
        .map_err(|source| EmailError::InvalidAddress {
            address: address.to_string(),
            source,
        })
}
