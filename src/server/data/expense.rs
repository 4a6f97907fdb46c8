//! Expense data repository.
//!
//! All lookups are scoped by user so one user's expenses are never visible to another.

use chrono::{Datelike, NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::expense::{CategorySpend, Expense, ExpenseFilter, ExpenseParams};

pub struct ExpenseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExpenseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i32, params: ExpenseParams) -> Result<Expense, DbErr> {
        let entity = entity::expense::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            description: ActiveValue::Set(params.description),
            category: ActiveValue::Set(params.category),
            amount_cents: ActiveValue::Set(params.amount_cents),
            spent_on: ActiveValue::Set(params.spent_on),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Expense::from_entity(entity))
    }

    /// Lists a user's expenses newest first, optionally restricted to a year or month.
    pub async fn get_for_user(
        &self,
        user_id: i32,
        filter: ExpenseFilter,
    ) -> Result<Vec<Expense>, DbErr> {
        let mut select = entity::prelude::Expense::find()
            .filter(entity::expense::Column::UserId.eq(user_id));

        if let Some((start, end)) = filter_range(filter) {
            select = select
                .filter(entity::expense::Column::SpentOn.gte(start))
                .filter(entity::expense::Column::SpentOn.lt(end));
        }

        let entities = select
            .order_by_desc(entity::expense::Column::SpentOn)
            .order_by_desc(entity::expense::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Expense::from_entity).collect())
    }

    /// Replaces an expense's fields. Returns `None` when it does not belong to the user.
    pub async fn update(
        &self,
        id: i32,
        user_id: i32,
        params: ExpenseParams,
    ) -> Result<Option<Expense>, DbErr> {
        let Some(existing) = entity::prelude::Expense::find_by_id(id)
            .filter(entity::expense::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::expense::ActiveModel = existing.into();
        active.description = ActiveValue::Set(params.description);
        active.category = ActiveValue::Set(params.category);
        active.amount_cents = ActiveValue::Set(params.amount_cents);
        active.spent_on = ActiveValue::Set(params.spent_on);

        Ok(Some(Expense::from_entity(active.update(self.db).await?)))
    }

    pub async fn delete(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Expense::delete_many()
            .filter(entity::expense::Column::Id.eq(id))
            .filter(entity::expense::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sums spending per category for a calendar month, largest category first.
    pub async fn month_by_category(
        &self,
        user_id: i32,
        year: i32,
        month: u32,
    ) -> Result<Vec<CategorySpend>, DbErr> {
        let expenses = self
            .get_for_user(
                user_id,
                ExpenseFilter {
                    year: Some(year),
                    month: Some(month),
                },
            )
            .await?;

        let mut totals: Vec<CategorySpend> = Vec::new();
        for expense in expenses {
            match totals.iter_mut().find(|c| c.category == expense.category) {
                Some(entry) => entry.amount_cents += expense.amount_cents,
                None => totals.push(CategorySpend {
                    category: expense.category,
                    amount_cents: expense.amount_cents,
                }),
            }
        }

        totals.sort_by(|a, b| {
            b.amount_cents
                .cmp(&a.amount_cents)
                .then_with(|| a.category.cmp(&b.category))
        });

        Ok(totals)
    }

    /// Total spending for a calendar month in cents.
    pub async fn month_total(&self, user_id: i32, year: i32, month: u32) -> Result<i64, DbErr> {
        let by_category = self.month_by_category(user_id, year, month).await?;
        Ok(by_category.iter().map(|c| c.amount_cents).sum())
    }
}

/// Half-open `[start, end)` date range covered by the filter.
///
/// A month without a year is ignored; a year alone covers the whole year.
fn filter_range(filter: ExpenseFilter) -> Option<(NaiveDate, NaiveDate)> {
    let year = filter.year?;

    match filter.month {
        Some(month) => month_range(year, month),
        None => Some((
            NaiveDate::from_ymd_opt(year, 1, 1)?,
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?,
        )),
    }
}

/// Half-open date range of a calendar month.
pub fn month_range(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if start.month() == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };

    Some((start, next))
}
