use crate::server::data::tracked_product::TrackedProductRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_alert_targets;
mod upsert;
