//! To-do item domain model and parameters.

use chrono::{DateTime, Utc};

use crate::model::todo::TodoDto;

#[derive(Debug, Clone, PartialEq)]
pub struct TodoItem {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub due_at: Option<DateTime<Utc>>,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    /// Set once the due reminder has been delivered; cleared when `due_at` changes.
    pub reminder_sent: bool,
    pub created_at: DateTime<Utc>,
}

impl TodoItem {
    pub fn into_dto(self) -> TodoDto {
        TodoDto {
            id: self.id,
            title: self.title,
            description: self.description,
            due_at: self.due_at,
            completed: self.completed,
            completed_at: self.completed_at,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::todo_item::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            description: entity.description,
            due_at: entity.due_at,
            completed: entity.completed,
            completed_at: entity.completed_at,
            reminder_sent: entity.reminder_sent,
            created_at: entity.created_at,
        }
    }
}

/// Validated to-do fields for create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoParams {
    pub title: String,
    pub description: Option<String>,
    pub due_at: Option<DateTime<Utc>>,
}
