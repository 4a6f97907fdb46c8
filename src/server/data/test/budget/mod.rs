use crate::server::{data::budget::BudgetRepository, model::expense::BudgetParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
