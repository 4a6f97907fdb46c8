use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Datelike, Utc};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        expense::{BudgetDto, BudgetSummaryDto, SetBudgetDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::budget::BudgetService,
        state::AppState, validation::expense::BudgetBuilder,
    },
};

/// Tag for grouping budget endpoints in OpenAPI documentation
pub static BUDGET_TAG: &str = "budget";

#[derive(Deserialize)]
pub struct BudgetSummaryParams {
    pub year: Option<i32>,
    pub month: Option<i32>,
}

/// Get all of the signed-in user's monthly budgets, newest month first.
#[utoipa::path(
    get,
    path = "/api/budgets",
    tag = BUDGET_TAG,
    responses(
        (status = 200, description = "Budgets", body = Vec<BudgetDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_budgets(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let budgets = BudgetService::new(&state.db).get_for_user(user.id).await?;

    let dtos: Vec<BudgetDto> = budgets.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Set the spending limit for a month, replacing any existing limit.
///
/// # Returns
/// - `200 OK` - The saved budget
/// - `400 Bad Request` - Year, month or limit out of range
#[utoipa::path(
    put,
    path = "/api/budgets",
    tag = BUDGET_TAG,
    request_body = SetBudgetDto,
    responses(
        (status = 200, description = "Budget saved", body = BudgetDto),
        (status = 400, description = "Invalid budget data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_budget(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SetBudgetDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let builder = BudgetBuilder::new()
        .year(payload.year)
        .month(payload.month)
        .limit(payload.limit);

    let budget = BudgetService::new(&state.db).set(user.id, builder).await?;

    Ok((StatusCode::OK, Json(budget.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/budgets/{budget_id}",
    tag = BUDGET_TAG,
    params(
        ("budget_id" = i32, Path, description = "Budget ID")
    ),
    responses(
        (status = 204, description = "Budget deleted"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Budget not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_budget(
    State(state): State<AppState>,
    session: Session,
    Path(budget_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    BudgetService::new(&state.db)
        .delete(user.id, budget_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Spending against the budget for one month.
///
/// # Arguments
/// - `params` - Year and month; each defaults to the current UTC month when omitted
///
/// # Returns
/// - `200 OK` - Limit (if set), total spent, remaining and per-category totals
/// - `400 Bad Request` - Year or month out of range
#[utoipa::path(
    get,
    path = "/api/budgets/summary",
    tag = BUDGET_TAG,
    params(
        ("year" = Option<i32>, Query, description = "Calendar year (default: current)"),
        ("month" = Option<i32>, Query, description = "Month number, 1-12 (default: current)")
    ),
    responses(
        (status = 200, description = "Monthly summary", body = BudgetSummaryDto),
        (status = 400, description = "Invalid year or month", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_budget_summary(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<BudgetSummaryParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let today = Utc::now().date_naive();
    let year = params.year.unwrap_or(today.year());
    let month = params.month.unwrap_or(today.month() as i32);

    let summary = BudgetService::new(&state.db)
        .summary(user.id, year, month)
        .await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}
