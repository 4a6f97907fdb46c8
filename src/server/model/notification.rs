//! In-app notification model.

use chrono::{DateTime, Utc};

use crate::model::todo::NotificationDto;

/// What raised a notification. Stored as its string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    TodoDue,
    PriceAlert,
    BudgetExceeded,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TodoDue => "todo_due",
            Self::PriceAlert => "price_alert",
            Self::BudgetExceeded => "budget_exceeded",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    pub todo_item_id: Option<i32>,
    pub kind: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            kind: self.kind,
            message: self.message,
            todo_item_id: self.todo_item_id,
            is_read: self.is_read,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            todo_item_id: entity.todo_item_id,
            kind: entity.kind,
            message: entity.message,
            is_read: entity.is_read,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for raising a notification.
#[derive(Debug, Clone)]
pub struct CreateNotificationParams {
    pub user_id: i32,
    pub todo_item_id: Option<i32>,
    pub kind: NotificationKind,
    pub message: String,
}
