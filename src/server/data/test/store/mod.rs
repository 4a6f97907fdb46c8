use crate::server::{data::store::StoreRepository, model::catalog::StoreParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;
