//! Expense and monthly budget domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::expense::{BudgetDto, BudgetSummaryDto, CategorySpendDto, ExpenseDto},
    server::util::money,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: i32,
    pub user_id: i32,
    pub description: String,
    pub category: String,
    pub amount_cents: i64,
    pub spent_on: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    pub fn into_dto(self) -> ExpenseDto {
        ExpenseDto {
            id: self.id,
            description: self.description,
            category: self.category,
            amount: money::from_cents(self.amount_cents),
            spent_on: self.spent_on,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::expense::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            description: entity.description,
            category: entity.category,
            amount_cents: entity.amount_cents,
            spent_on: entity.spent_on,
            created_at: entity.created_at,
        }
    }
}

/// Validated expense fields for create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseParams {
    pub description: String,
    pub category: String,
    pub amount_cents: i64,
    pub spent_on: NaiveDate,
}

/// Optional calendar month filter for expense listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpenseFilter {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Budget {
    pub id: i32,
    pub user_id: i32,
    pub year: i32,
    pub month: i32,
    pub limit_cents: i64,
}

impl Budget {
    pub fn into_dto(self) -> BudgetDto {
        BudgetDto {
            id: self.id,
            year: self.year,
            month: self.month,
            limit: money::from_cents(self.limit_cents),
        }
    }

    pub fn from_entity(entity: entity::monthly_budget::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            year: entity.year,
            month: entity.month,
            limit_cents: entity.limit_cents,
        }
    }
}

/// Validated budget limit for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetParams {
    pub year: i32,
    pub month: u32,
    pub limit_cents: i64,
}

/// Spending in one category for a month.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpend {
    pub category: String,
    pub amount_cents: i64,
}

/// Month overview comparing spending with the budget limit.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    pub year: i32,
    pub month: u32,
    pub limit_cents: Option<i64>,
    pub spent_cents: i64,
    /// Largest category first.
    pub by_category: Vec<CategorySpend>,
}

impl BudgetSummary {
    /// Limit minus spending; negative when over budget, `None` without a budget.
    pub fn remaining_cents(&self) -> Option<i64> {
        self.limit_cents.map(|limit| limit - self.spent_cents)
    }

    pub fn into_dto(self) -> BudgetSummaryDto {
        let remaining = self.remaining_cents().map(money::from_cents);

        BudgetSummaryDto {
            year: self.year,
            month: self.month as i32,
            limit: self.limit_cents.map(money::from_cents),
            spent: money::from_cents(self.spent_cents),
            remaining,
            by_category: self
                .by_category
                .into_iter()
                .map(|c| CategorySpendDto {
                    category: c.category,
                    amount: money::from_cents(c.amount_cents),
                })
                .collect(),
        }
    }
}
