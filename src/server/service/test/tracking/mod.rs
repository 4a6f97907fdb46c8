use rust_decimal::Decimal;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{error::AppError, service::tracking::TrackingService};

mod track;
