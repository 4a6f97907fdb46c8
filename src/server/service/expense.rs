//! Expense tracking with budget-crossing alerts.

use chrono::Datelike;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{budget::BudgetRepository, expense::ExpenseRepository, notification::NotificationRepository},
    error::AppError,
    model::{
        expense::{Expense, ExpenseFilter},
        notification::{CreateNotificationParams, NotificationKind},
        user::User,
    },
    service::email::{template::EmailTemplate, EmailService},
    util::money,
    validation::expense::ExpenseBuilder,
};

pub struct ExpenseService<'a> {
    db: &'a DatabaseConnection,
    email: &'a EmailService,
}

impl<'a> ExpenseService<'a> {
    pub fn new(db: &'a DatabaseConnection, email: &'a EmailService) -> Self {
        Self { db, email }
    }

    pub async fn get_for_user(
        &self,
        user_id: i32,
        filter: ExpenseFilter,
    ) -> Result<Vec<Expense>, AppError> {
        Ok(ExpenseRepository::new(self.db)
            .get_for_user(user_id, filter)
            .await?)
    }

    /// Records an expense for the user.
    ///
    /// When the expense pushes the month's spending over its budget a
    /// `budget_exceeded` notification and email are sent.
    pub async fn create(&self, user: &User, builder: ExpenseBuilder) -> Result<Expense, AppError> {
        let params = builder.build()?;
        let expense_repo = ExpenseRepository::new(self.db);

        let (year, month) = (params.spent_on.year(), params.spent_on.month());
        let before = expense_repo.month_total(user.id, year, month).await?;

        let expense = expense_repo.create(user.id, params).await?;

        self.check_budget(user, year, month, before).await?;

        Ok(expense)
    }

    /// Replaces an expense owned by the user.
    ///
    /// # Returns
    /// - `Ok(Expense)` - Updated expense
    /// - `Err(AppError::ValidationErr)` - Field rules failed
    /// - `Err(AppError::NotFound)` - No such expense for this user
    pub async fn update(
        &self,
        user: &User,
        id: i32,
        builder: ExpenseBuilder,
    ) -> Result<Expense, AppError> {
        let params = builder.build()?;
        let expense_repo = ExpenseRepository::new(self.db);

        let (year, month) = (params.spent_on.year(), params.spent_on.month());
        let before = expense_repo.month_total(user.id, year, month).await?;

        let expense = expense_repo
            .update(id, user.id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Expense not found".to_string()))?;

        self.check_budget(user, year, month, before).await?;

        Ok(expense)
    }

    pub async fn delete(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        let deleted = ExpenseRepository::new(self.db).delete(id, user_id).await?;
        if !deleted {
            return Err(AppError::NotFound("Expense not found".to_string()));
        }
        Ok(())
    }

    /// Alerts the user when spending moved from within the limit to above it.
    async fn check_budget(
        &self,
        user: &User,
        year: i32,
        month: u32,
        before_cents: i64,
    ) -> Result<(), AppError> {
        let Some(budget) = BudgetRepository::new(self.db)
            .find_for_month(user.id, year, month)
            .await?
        else {
            return Ok(());
        };

        let after_cents = ExpenseRepository::new(self.db)
            .month_total(user.id, year, month)
            .await?;

        if !crossed_limit(before_cents, after_cents, budget.limit_cents) {
            return Ok(());
        }

        let limit = money::from_cents(budget.limit_cents);
        let spent = money::from_cents(after_cents);

        tracing::info!(
            "User {} exceeded the budget for {}-{:02}",
            user.id,
            year,
            month
        );

        NotificationRepository::new(self.db)
            .create(CreateNotificationParams {
                user_id: user.id,
                todo_item_id: None,
                kind: NotificationKind::BudgetExceeded,
                message: format!(
                    "You have spent {} of your {} budget for {}-{:02}",
                    spent, limit, year, month
                ),
            })
            .await?;

        self.email
            .send_or_log(
                &user.email,
                EmailTemplate::BudgetExceeded {
                    username: user.username.clone(),
                    year,
                    month,
                    limit,
                    spent,
                },
            )
            .await;

        Ok(())
    }
}

/// True when spending went from at-or-under the limit to over it.
fn crossed_limit(before_cents: i64, after_cents: i64, limit_cents: i64) -> bool {
    before_cents <= limit_cents && after_cents > limit_cents
}
