use sea_orm::DatabaseConnection;

use crate::server::{
    data::notification::NotificationRepository, error::AppError,
    model::notification::Notification,
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_for_user(
        &self,
        user_id: i32,
        unread_only: bool,
    ) -> Result<Vec<Notification>, AppError> {
        Ok(NotificationRepository::new(self.db)
            .get_for_user(user_id, unread_only)
            .await?)
    }

    pub async fn unread_count(&self, user_id: i32) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db)
            .count_unread(user_id)
            .await?)
    }

    pub async fn mark_read(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        let found = NotificationRepository::new(self.db)
            .mark_read(id, user_id)
            .await?;
        if !found {
            return Err(AppError::NotFound("Notification not found".to_string()));
        }
        Ok(())
    }

    /// Marks every unread notification read, returning how many changed.
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db)
            .mark_all_read(user_id)
            .await?)
    }

    pub async fn delete(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        let deleted = NotificationRepository::new(self.db)
            .delete(id, user_id)
            .await?;
        if !deleted {
            return Err(AppError::NotFound("Notification not found".to_string()));
        }
        Ok(())
    }
}
