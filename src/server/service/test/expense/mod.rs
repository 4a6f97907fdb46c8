use chrono::NaiveDate;
use rust_decimal::Decimal;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::{expense::ExpenseFilter, user::User},
    service::{
        email::{template::EmailTemplate, EmailService},
        expense::ExpenseService,
    },
    validation::expense::ExpenseBuilder,
};

mod budget_alert;
mod manage;

fn expense(cents: i64, spent_on: NaiveDate) -> ExpenseBuilder {
    ExpenseBuilder::new()
        .description("Groceries")
        .category("Food")
        .amount(Decimal::new(cents, 2))
        .spent_on(Some(spent_on))
}

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).unwrap()
}
