//! To-do item repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::todo::{TodoItem, TodoParams};

pub struct TodoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TodoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i32, params: TodoParams) -> Result<TodoItem, DbErr> {
        let entity = entity::todo_item::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            due_at: ActiveValue::Set(params.due_at),
            completed: ActiveValue::Set(false),
            completed_at: ActiveValue::Set(None),
            reminder_sent: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(TodoItem::from_entity(entity))
    }

    /// Lists a user's to-dos, soonest due first with undated items last.
    ///
    /// # Arguments
    /// - `completed` - Restrict to completed or open items when set
    pub async fn get_for_user(
        &self,
        user_id: i32,
        completed: Option<bool>,
    ) -> Result<Vec<TodoItem>, DbErr> {
        let mut select = entity::prelude::TodoItem::find()
            .filter(entity::todo_item::Column::UserId.eq(user_id));

        if let Some(completed) = completed {
            select = select.filter(entity::todo_item::Column::Completed.eq(completed));
        }

        let mut items: Vec<TodoItem> = select
            .order_by_asc(entity::todo_item::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(TodoItem::from_entity)
            .collect();

        items.sort_by_key(|item| (item.due_at.is_none(), item.due_at));

        Ok(items)
    }

    /// Replaces a to-do's editable fields.
    ///
    /// The reminder flag is cleared when the due date changes so the new date gets its
    /// own reminder.
    pub async fn update(
        &self,
        id: i32,
        user_id: i32,
        params: TodoParams,
    ) -> Result<Option<TodoItem>, DbErr> {
        let Some(existing) = entity::prelude::TodoItem::find_by_id(id)
            .filter(entity::todo_item::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let due_changed = existing.due_at != params.due_at;

        let mut active: entity::todo_item::ActiveModel = existing.into();
        active.title = ActiveValue::Set(params.title);
        active.description = ActiveValue::Set(params.description);
        active.due_at = ActiveValue::Set(params.due_at);
        if due_changed {
            active.reminder_sent = ActiveValue::Set(false);
        }

        Ok(Some(TodoItem::from_entity(active.update(self.db).await?)))
    }

    /// Marks a to-do completed at `now`. Completing twice keeps the first timestamp.
    pub async fn complete(
        &self,
        id: i32,
        user_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Option<TodoItem>, DbErr> {
        let Some(existing) = entity::prelude::TodoItem::find_by_id(id)
            .filter(entity::todo_item::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if existing.completed {
            return Ok(Some(TodoItem::from_entity(existing)));
        }

        let mut active: entity::todo_item::ActiveModel = existing.into();
        active.completed = ActiveValue::Set(true);
        active.completed_at = ActiveValue::Set(Some(now));

        Ok(Some(TodoItem::from_entity(active.update(self.db).await?)))
    }

    pub async fn delete(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::TodoItem::delete_many()
            .filter(entity::todo_item::Column::Id.eq(id))
            .filter(entity::todo_item::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Finds open to-dos due at or before `cutoff` that have not had a reminder yet.
    pub async fn get_due_for_reminder(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<TodoItem>, DbErr> {
        let entities = entity::prelude::TodoItem::find()
            .filter(entity::todo_item::Column::Completed.eq(false))
            .filter(entity::todo_item::Column::ReminderSent.eq(false))
            .filter(entity::todo_item::Column::DueAt.is_not_null())
            .filter(entity::todo_item::Column::DueAt.lte(cutoff))
            .order_by_asc(entity::todo_item::Column::DueAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(TodoItem::from_entity).collect())
    }

    pub async fn mark_reminder_sent(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::TodoItem::update_many()
            .filter(entity::todo_item::Column::Id.eq(id))
            .col_expr(entity::todo_item::Column::ReminderSent, Expr::value(true))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
