//! Monthly budgets and spending summaries.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{budget::BudgetRepository, expense::ExpenseRepository},
    error::AppError,
    model::expense::{Budget, BudgetSummary},
    validation::expense::{validate_month, validate_year, BudgetBuilder},
};

pub struct BudgetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BudgetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Budget>, AppError> {
        Ok(BudgetRepository::new(self.db).get_for_user(user_id).await?)
    }

    /// Sets the user's limit for a month, replacing any existing limit.
    pub async fn set(&self, user_id: i32, builder: BudgetBuilder) -> Result<Budget, AppError> {
        let params = builder.build()?;
        let budget = BudgetRepository::new(self.db).upsert(user_id, params).await?;

        tracing::debug!(
            "User {} set budget for {}-{:02}",
            user_id,
            budget.year,
            budget.month
        );

        Ok(budget)
    }

    pub async fn delete(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        let deleted = BudgetRepository::new(self.db).delete(id, user_id).await?;
        if !deleted {
            return Err(AppError::NotFound("Budget not found".to_string()));
        }
        Ok(())
    }

    /// Compares a month's spending with its budget.
    ///
    /// # Arguments
    /// - `year` - Calendar year, 2000-2100
    /// - `month` - Month, 1-12
    ///
    /// # Returns
    /// - `Ok(BudgetSummary)` - Limit (if any), spending and per-category totals
    /// - `Err(AppError::ValidationErr)` - Year or month out of range
    pub async fn summary(
        &self,
        user_id: i32,
        year: i32,
        month: i32,
    ) -> Result<BudgetSummary, AppError> {
        let year = validate_year(Some(year))?;
        let month = validate_month(Some(month))?;

        let budget = BudgetRepository::new(self.db)
            .find_for_month(user_id, year, month)
            .await?;
        let by_category = ExpenseRepository::new(self.db)
            .month_by_category(user_id, year, month)
            .await?;

        Ok(BudgetSummary {
            year,
            month,
            limit_cents: budget.map(|b| b.limit_cents),
            spent_cents: by_category.iter().map(|c| c.amount_cents).sum(),
            by_category,
        })
    }
}
