use crate::server::{
    data::expense::{month_range, ExpenseRepository},
    model::expense::{ExpenseFilter, ExpenseParams},
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_for_user;
mod month_totals;
mod update;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
