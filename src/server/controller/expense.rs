use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        expense::{ExpenseDto, SaveExpenseDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::expense::ExpenseFilter,
        service::expense::ExpenseService,
        state::AppState,
        validation::expense::{validate_month, validate_year, ExpenseBuilder},
    },
};

/// Tag for grouping expense endpoints in OpenAPI documentation
pub static EXPENSE_TAG: &str = "expense";

#[derive(Deserialize)]
pub struct ExpenseListParams {
    pub year: Option<i32>,
    pub month: Option<i32>,
}

fn builder(payload: SaveExpenseDto) -> ExpenseBuilder {
    ExpenseBuilder::new()
        .description(payload.description)
        .category(payload.category)
        .amount(payload.amount)
        .spent_on(payload.spent_on)
}

/// Get the signed-in user's expenses, newest first.
///
/// # Arguments
/// - `params` - Optional year and month; each narrows the listing independently
///
/// # Returns
/// - `200 OK` - Matching expenses
/// - `400 Bad Request` - Year or month out of range
#[utoipa::path(
    get,
    path = "/api/expenses",
    tag = EXPENSE_TAG,
    params(
        ("year" = Option<i32>, Query, description = "Calendar year"),
        ("month" = Option<i32>, Query, description = "Month number, 1-12")
    ),
    responses(
        (status = 200, description = "Expenses", body = Vec<ExpenseDto>),
        (status = 400, description = "Invalid year or month", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_expenses(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ExpenseListParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let filter = ExpenseFilter {
        year: params.year.map(|y| validate_year(Some(y))).transpose()?,
        month: params.month.map(|m| validate_month(Some(m))).transpose()?,
    };

    let expenses = ExpenseService::new(&state.db, &state.email)
        .get_for_user(user.id, filter)
        .await?;

    let dtos: Vec<ExpenseDto> = expenses.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Record an expense.
///
/// When the expense pushes the month over its budget the user is notified.
///
/// # Returns
/// - `201 Created` - The recorded expense
/// - `400 Bad Request` - Invalid fields
#[utoipa::path(
    post,
    path = "/api/expenses",
    tag = EXPENSE_TAG,
    request_body = SaveExpenseDto,
    responses(
        (status = 201, description = "Expense recorded", body = ExpenseDto),
        (status = 400, description = "Invalid expense data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_expense(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveExpenseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let expense = ExpenseService::new(&state.db, &state.email)
        .create(&user, builder(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(expense.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/expenses/{expense_id}",
    tag = EXPENSE_TAG,
    params(
        ("expense_id" = i32, Path, description = "Expense ID")
    ),
    request_body = SaveExpenseDto,
    responses(
        (status = 200, description = "Expense updated", body = ExpenseDto),
        (status = 400, description = "Invalid expense data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Expense not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_expense(
    State(state): State<AppState>,
    session: Session,
    Path(expense_id): Path<i32>,
    Json(payload): Json<SaveExpenseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let expense = ExpenseService::new(&state.db, &state.email)
        .update(&user, expense_id, builder(payload))
        .await?;

    Ok((StatusCode::OK, Json(expense.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/expenses/{expense_id}",
    tag = EXPENSE_TAG,
    params(
        ("expense_id" = i32, Path, description = "Expense ID")
    ),
    responses(
        (status = 204, description = "Expense deleted"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Expense not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_expense(
    State(state): State<AppState>,
    session: Session,
    Path(expense_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ExpenseService::new(&state.db, &state.email)
        .delete(user.id, expense_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
