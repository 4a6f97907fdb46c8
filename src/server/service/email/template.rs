//! Email templates.
//!
//! Each template renders a subject and a Markdown body. The Markdown is sent as the
//! plain-text part and converted to HTML with pulldown-cmark for the HTML part.

use chrono::{DateTime, Utc};
use pulldown_cmark::{html, Event, Options, Parser};
use rust_decimal::Decimal;

/// Every kind of email the application sends.
#[derive(Debug, Clone, PartialEq)]
pub enum EmailTemplate {
    ConfirmEmail {
        username: String,
        link: String,
    },
    PasswordReset {
        username: String,
        link: String,
    },
    TwoFactorEnabled {
        username: String,
    },
    TodoReminder {
        username: String,
        title: String,
        due_at: DateTime<Utc>,
    },
    PriceAlert {
        username: String,
        product_name: String,
        store_name: String,
        amount: Decimal,
        target: Decimal,
    },
    BudgetExceeded {
        username: String,
        year: i32,
        month: u32,
        limit: Decimal,
        spent: Decimal,
    },
}

/// A template rendered into its message parts.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedEmail {
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl EmailTemplate {
    pub fn render(&self) -> RenderedEmail {
        let subject = self.subject();
        let text = self.markdown();
        let html = markdown_to_html(&text);

        RenderedEmail {
            subject,
            text,
            html,
        }
    }

    fn subject(&self) -> String {
        match self {
            Self::ConfirmEmail { .. } => "Confirm your email address".to_string(),
            Self::PasswordReset { .. } => "Reset your password".to_string(),
            Self::TwoFactorEnabled { .. } => "Two-factor authentication enabled".to_string(),
            Self::TodoReminder { title, .. } => format!("Reminder: {}", title),
            Self::PriceAlert { product_name, .. } => format!("Price alert: {}", product_name),
            Self::BudgetExceeded { year, month, .. } => {
                format!("Budget exceeded for {}-{:02}", year, month)
            }
        }
    }

    fn markdown(&self) -> String {
        match self {
            Self::ConfirmEmail { username, link } => format!(
                "Hi {username},\n\n\
                 Please confirm your email address by following this link:\n\n\
                 [Confirm email]({link})\n\n\
                 The link is valid for 24 hours."
            ),
            Self::PasswordReset { username, link } => format!(
                "Hi {username},\n\n\
                 A password reset was requested for your account.\n\n\
                 [Reset password]({link})\n\n\
                 The link is valid for 1 hour. If you did not request this you can ignore this email."
            ),
            Self::TwoFactorEnabled { username } => format!(
                "Hi {username},\n\n\
                 Two-factor authentication is now **enabled** on your account.\n\n\
                 Keep your recovery codes somewhere safe. If this wasn't you, reset your \
                 password immediately."
            ),
            Self::TodoReminder {
                username,
                title,
                due_at,
            } => format!(
                "Hi {username},\n\n\
                 Your to-do **{title}** is due at {}.",
                due_at.format("%Y-%m-%d %H:%M UTC")
            ),
            Self::PriceAlert {
                username,
                product_name,
                store_name,
                amount,
                target,
            } => format!(
                "Hi {username},\n\n\
                 **{product_name}** is now {amount} at {store_name}, \
                 at or below your target of {target}."
            ),
            Self::BudgetExceeded {
                username,
                year,
                month,
                limit,
                spent,
            } => format!(
                "Hi {username},\n\n\
                 Your spending for {year}-{month:02} is {spent}, above your budget of {limit}."
            ),
        }
    }
}

/// Renders Markdown to HTML with raw HTML from user-supplied names shown as text.
fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::all()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        event => event,
    });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
