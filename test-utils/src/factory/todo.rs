use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating to-do items.
pub struct TodoFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    title: String,
    description: Option<String>,
    due_at: Option<DateTime<Utc>>,
    completed: bool,
    reminder_sent: bool,
}

impl<'a> TodoFactory<'a> {
    /// Defaults: title "Buy milk", no due date, open, reminder not sent.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            title: "Buy milk".to_string(),
            description: None,
            due_at: None,
            completed: false,
            reminder_sent: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn due_at(mut self, due_at: DateTime<Utc>) -> Self {
        self.due_at = Some(due_at);
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn reminder_sent(mut self, reminder_sent: bool) -> Self {
        self.reminder_sent = reminder_sent;
        self
    }

    pub async fn build(self) -> Result<entity::todo_item::Model, DbErr> {
        let now = Utc::now();
        entity::todo_item::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            due_at: ActiveValue::Set(self.due_at),
            completed: ActiveValue::Set(self.completed),
            completed_at: ActiveValue::Set(self.completed.then_some(now)),
            reminder_sent: ActiveValue::Set(self.reminder_sent),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_todo(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::todo_item::Model, DbErr> {
    TodoFactory::new(db, user_id).build().await
}
