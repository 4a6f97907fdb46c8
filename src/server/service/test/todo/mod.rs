use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    service::{
        email::{template::EmailTemplate, EmailService},
        todo::TodoService,
    },
    validation::todo::TodoBuilder,
};

mod send_due_reminders;
