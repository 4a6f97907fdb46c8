//! Monthly budget repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::expense::{Budget, BudgetParams};

pub struct BudgetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BudgetRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sets the limit for a month, creating the budget if needed.
    ///
    /// At most one budget exists per user and month.
    pub async fn upsert(&self, user_id: i32, params: BudgetParams) -> Result<Budget, DbErr> {
        let existing = entity::prelude::MonthlyBudget::find()
            .filter(entity::monthly_budget::Column::UserId.eq(user_id))
            .filter(entity::monthly_budget::Column::Year.eq(params.year))
            .filter(entity::monthly_budget::Column::Month.eq(params.month as i32))
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(model) => {
                let mut active: entity::monthly_budget::ActiveModel = model.into();
                active.limit_cents = ActiveValue::Set(params.limit_cents);
                active.update(self.db).await?
            }
            None => {
                entity::monthly_budget::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    year: ActiveValue::Set(params.year),
                    month: ActiveValue::Set(params.month as i32),
                    limit_cents: ActiveValue::Set(params.limit_cents),
                    created_at: ActiveValue::Set(Utc::now()),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(Budget::from_entity(entity))
    }

    /// Finds the budget for one month.
    pub async fn find_for_month(
        &self,
        user_id: i32,
        year: i32,
        month: u32,
    ) -> Result<Option<Budget>, DbErr> {
        let entity = entity::prelude::MonthlyBudget::find()
            .filter(entity::monthly_budget::Column::UserId.eq(user_id))
            .filter(entity::monthly_budget::Column::Year.eq(year))
            .filter(entity::monthly_budget::Column::Month.eq(month as i32))
            .one(self.db)
            .await?;

        Ok(entity.map(Budget::from_entity))
    }

    /// Lists a user's budgets, most recent month first.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Budget>, DbErr> {
        let entities = entity::prelude::MonthlyBudget::find()
            .filter(entity::monthly_budget::Column::UserId.eq(user_id))
            .order_by_desc(entity::monthly_budget::Column::Year)
            .order_by_desc(entity::monthly_budget::Column::Month)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Budget::from_entity).collect())
    }

    pub async fn delete(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::MonthlyBudget::delete_many()
            .filter(entity::monthly_budget::Column::Id.eq(id))
            .filter(entity::monthly_budget::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
