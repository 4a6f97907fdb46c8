use chrono::NaiveDate;
use rust_decimal::Decimal;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::{notification::NotificationRepository, tracked_product::TrackedProductRepository},
    error::AppError,
    model::price::PriceHistoryQuery,
    service::{
        email::{template::EmailTemplate, EmailService},
        price::PriceService,
    },
    validation::catalog::PriceBuilder,
};

mod history;
mod record;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, day).unwrap()
}

fn price(product_id: i32, store_id: i32, cents: i64, day: u32) -> PriceBuilder {
    PriceBuilder::new()
        .product_id(product_id)
        .store_id(store_id)
        .amount(Decimal::new(cents, 2))
        .recorded_on(Some(date(day)))
}
