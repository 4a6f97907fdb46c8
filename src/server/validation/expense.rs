//! Builders for expenses and monthly budgets.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::server::{
    error::validation::ValidationError,
    model::expense::{BudgetParams, ExpenseParams},
    validation::{catalog::amount_cents, required_text},
};

const DESCRIPTION_MAX: usize = 200;
const CATEGORY_MAX: usize = 50;
/// 1 000 000.00
const MAX_EXPENSE_CENTS: i64 = 100_000_000;
/// 10 000 000.00
const MAX_BUDGET_CENTS: i64 = 1_000_000_000;
const MIN_YEAR: i32 = 2000;
const MAX_YEAR: i32 = 2100;

#[derive(Default)]
pub struct ExpenseBuilder {
    description: Option<String>,
    category: Option<String>,
    amount: Option<Decimal>,
    spent_on: Option<NaiveDate>,
}

impl ExpenseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Spending date; today (UTC) when not set.
    pub fn spent_on(mut self, spent_on: Option<NaiveDate>) -> Self {
        self.spent_on = spent_on;
        self
    }

    pub fn build(self) -> Result<ExpenseParams, ValidationError> {
        let description = required_text("description", self.description, 1, DESCRIPTION_MAX)?;
        let category = required_text("category", self.category, 1, CATEGORY_MAX)?;
        let amount_cents = amount_cents("amount", self.amount, MAX_EXPENSE_CENTS)?;

        Ok(ExpenseParams {
            description,
            category,
            amount_cents,
            spent_on: self.spent_on.unwrap_or_else(|| Utc::now().date_naive()),
        })
    }
}

#[derive(Default)]
pub struct BudgetBuilder {
    year: Option<i32>,
    month: Option<i32>,
    limit: Option<Decimal>,
}

impl BudgetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn month(mut self, month: i32) -> Self {
        self.month = Some(month);
        self
    }

    pub fn limit(mut self, limit: Decimal) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn build(self) -> Result<BudgetParams, ValidationError> {
        let year = validate_year(self.year)?;
        let month = validate_month(self.month)?;
        let limit_cents = amount_cents("limit", self.limit, MAX_BUDGET_CENTS)?;

        Ok(BudgetParams {
            year,
            month,
            limit_cents,
        })
    }
}

/// Checks a budget year lies within 2000-2100.
pub fn validate_year(year: Option<i32>) -> Result<i32, ValidationError> {
    match year {
        Some(year) if (MIN_YEAR..=MAX_YEAR).contains(&year) => Ok(year),
        Some(_) => Err(ValidationError::new(
            "year",
            format!("year must be between {} and {}", MIN_YEAR, MAX_YEAR),
        )),
        None => Err(ValidationError::new("year", "year is required")),
    }
}

/// Checks a month number lies within 1-12.
pub fn validate_month(month: Option<i32>) -> Result<u32, ValidationError> {
    match month {
        Some(month) if (1..=12).contains(&month) => Ok(month as u32),
        Some(_) => Err(ValidationError::new("month", "month must be between 1 and 12")),
        None => Err(ValidationError::new("month", "month is required")),
    }
}
