use crate::server::{data::user_token::UserTokenRepository, model::user::TokenPurpose};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete_expired;
