use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExpenseDto {
    pub id: i32,
    pub description: String,
    pub category: String,
    #[schema(value_type = String, example = "12.50")]
    pub amount: Decimal,
    pub spent_on: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveExpenseDto {
    pub description: String,
    pub category: String,
    #[schema(value_type = String, example = "12.50")]
    pub amount: Decimal,
    /// Defaults to today (UTC).
    #[serde(default)]
    pub spent_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BudgetDto {
    pub id: i32,
    pub year: i32,
    pub month: i32,
    #[schema(value_type = String, example = "500.00")]
    pub limit: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetBudgetDto {
    pub year: i32,
    pub month: i32,
    #[schema(value_type = String, example = "500.00")]
    pub limit: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategorySpendDto {
    pub category: String,
    #[schema(value_type = String)]
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BudgetSummaryDto {
    pub year: i32,
    pub month: i32,
    #[schema(value_type = Option<String>)]
    pub limit: Option<Decimal>,
    #[schema(value_type = String)]
    pub spent: Decimal,
    /// Negative when the month is over budget.
    #[schema(value_type = Option<String>)]
    pub remaining: Option<Decimal>,
    pub by_category: Vec<CategorySpendDto>,
}
