use crate::server::{
    data::notification::NotificationRepository,
    model::notification::{CreateNotificationParams, NotificationKind},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};


fn params(user_id: i32, message: &str) -> CreateNotificationParams {
    CreateNotificationParams {
        user_id,
        todo_item_id: None,
        kind: NotificationKind::PriceAlert,
        message: message.to_string(),
    }
}
