//! Notification repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::notification::{CreateNotificationParams, Notification};

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateNotificationParams) -> Result<Notification, DbErr> {
        let entity = entity::notification::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            todo_item_id: ActiveValue::Set(params.todo_item_id),
            kind: ActiveValue::Set(params.kind.as_str().to_string()),
            message: ActiveValue::Set(params.message),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    /// Lists a user's notifications newest first.
    pub async fn get_for_user(
        &self,
        user_id: i32,
        unread_only: bool,
    ) -> Result<Vec<Notification>, DbErr> {
        let mut select = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id));

        if unread_only {
            select = select.filter(entity::notification::Column::IsRead.eq(false));
        }

        let entities = select
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Notification::from_entity).collect())
    }

    pub async fn count_unread(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .count(self.db)
            .await
    }

    /// Marks one notification read. Returns false if it does not belong to the user.
    pub async fn mark_read(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let exists = entity::prelude::Notification::find_by_id(id)
            .filter(entity::notification::Column::UserId.eq(user_id))
            .count(self.db)
            .await?
            > 0;

        if exists {
            entity::prelude::Notification::update_many()
                .filter(entity::notification::Column::Id.eq(id))
                .col_expr(entity::notification::Column::IsRead, Expr::value(true))
                .exec(self.db)
                .await?;
        }

        Ok(exists)
    }

    /// Marks all of a user's notifications read, returning how many changed.
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .col_expr(entity::notification::Column::IsRead, Expr::value(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Notification::delete_many()
            .filter(entity::notification::Column::Id.eq(id))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
