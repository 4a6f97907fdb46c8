use crate::server::data::recovery_code::RecoveryCodeRepository;
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod consume;
