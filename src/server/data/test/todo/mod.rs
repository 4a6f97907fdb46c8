use crate::server::{data::todo::TodoRepository, model::todo::TodoParams};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod complete;
mod get_due_for_reminder;
mod update;
