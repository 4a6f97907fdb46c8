use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::catalog::ProductQuery,
    service::product::ProductService,
    validation::catalog::ProductBuilder,
};

mod get_detail;
mod manage;

fn product(name: &str) -> ProductBuilder {
    ProductBuilder::new().name(name).category("Groceries")
}
