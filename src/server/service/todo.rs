//! To-do items and their due-date reminders.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{notification::NotificationRepository, todo::TodoRepository, user::UserRepository},
    error::AppError,
    model::{
        notification::{CreateNotificationParams, NotificationKind},
        todo::TodoItem,
    },
    service::email::{template::EmailTemplate, EmailService},
    validation::todo::TodoBuilder,
};

pub struct TodoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TodoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_for_user(
        &self,
        user_id: i32,
        completed: Option<bool>,
    ) -> Result<Vec<TodoItem>, AppError> {
        Ok(TodoRepository::new(self.db)
            .get_for_user(user_id, completed)
            .await?)
    }

    pub async fn create(&self, user_id: i32, builder: TodoBuilder) -> Result<TodoItem, AppError> {
        let params = builder.build()?;
        Ok(TodoRepository::new(self.db).create(user_id, params).await?)
    }

    /// Replaces a to-do's fields. A changed due date re-arms its reminder.
    pub async fn update(
        &self,
        user_id: i32,
        id: i32,
        builder: TodoBuilder,
    ) -> Result<TodoItem, AppError> {
        let params = builder.build()?;
        TodoRepository::new(self.db)
            .update(id, user_id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("To-do not found".to_string()))
    }

    pub async fn complete(&self, user_id: i32, id: i32) -> Result<TodoItem, AppError> {
        TodoRepository::new(self.db)
            .complete(id, user_id, Utc::now())
            .await?
            .ok_or_else(|| AppError::NotFound("To-do not found".to_string()))
    }

    pub async fn delete(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        let deleted = TodoRepository::new(self.db).delete(id, user_id).await?;
        if !deleted {
            return Err(AppError::NotFound("To-do not found".to_string()));
        }
        Ok(())
    }

    /// Sends reminders for open to-dos due within `lead` of `now`.
    ///
    /// Each to-do gets one `todo_due` notification and one email, then is marked so
    /// later runs skip it. Email failures are logged.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of reminders sent
    /// - `Err(AppError::DbErr)` - Database error while reading or marking to-dos
    pub async fn send_due_reminders(
        &self,
        email: &EmailService,
        now: DateTime<Utc>,
        lead: Duration,
    ) -> Result<usize, AppError> {
        let todo_repo = TodoRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);
        let notification_repo = NotificationRepository::new(self.db);

        let due = todo_repo.get_due_for_reminder(now + lead).await?;

        for todo in &due {
            let Some(due_at) = todo.due_at else {
                continue;
            };

            notification_repo
                .create(CreateNotificationParams {
                    user_id: todo.user_id,
                    todo_item_id: Some(todo.id),
                    kind: NotificationKind::TodoDue,
                    message: format!(
                        "'{}' is due at {}",
                        todo.title,
                        due_at.format("%Y-%m-%d %H:%M UTC")
                    ),
                })
                .await?;

            if let Some(user) = user_repo.find_by_id(todo.user_id).await? {
                email
                    .send_or_log(
                        &user.email,
                        EmailTemplate::TodoReminder {
                            username: user.username,
                            title: todo.title.clone(),
                            due_at,
                        },
                    )
                    .await;
            }

            todo_repo.mark_reminder_sent(todo.id).await?;
        }

        Ok(due.len())
    }
}
