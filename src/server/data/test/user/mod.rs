use crate::server::{data::user::UserRepository, model::user::CreateUserParams};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_login;
mod get_all_paginated;
mod lockout;
mod update_email;
