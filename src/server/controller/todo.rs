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
        todo::{SaveTodoDto, TodoDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::todo::TodoService,
        state::AppState, validation::todo::TodoBuilder,
    },
};

/// Tag for grouping to-do endpoints in OpenAPI documentation
pub static TODO_TAG: &str = "todo";

#[derive(Deserialize)]
pub struct TodoListParams {
    pub completed: Option<bool>,
}

fn builder(payload: SaveTodoDto) -> TodoBuilder {
    TodoBuilder::new()
        .title(payload.title)
        .description(payload.description)
        .due_at(payload.due_at)
}

/// Get the signed-in user's to-do items.
///
/// Open items come first ordered by due date, undated items last.
#[utoipa::path(
    get,
    path = "/api/todos",
    tag = TODO_TAG,
    params(
        ("completed" = Option<bool>, Query, description = "Only completed (true) or open (false) items")
    ),
    responses(
        (status = 200, description = "To-do items", body = Vec<TodoDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_todos(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<TodoListParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let todos = TodoService::new(&state.db)
        .get_for_user(user.id, params.completed)
        .await?;

    let dtos: Vec<TodoDto> = todos.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a to-do item. Items with a due date get an email reminder before they are due.
#[utoipa::path(
    post,
    path = "/api/todos",
    tag = TODO_TAG,
    request_body = SaveTodoDto,
    responses(
        (status = 201, description = "To-do created", body = TodoDto),
        (status = 400, description = "Invalid to-do data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_todo(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveTodoDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let todo = TodoService::new(&state.db)
        .create(user.id, builder(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(todo.into_dto())))
}

/// Replace a to-do item's fields. Changing the due date re-arms its reminder.
#[utoipa::path(
    put,
    path = "/api/todos/{todo_id}",
    tag = TODO_TAG,
    params(
        ("todo_id" = i32, Path, description = "To-do ID")
    ),
    request_body = SaveTodoDto,
    responses(
        (status = 200, description = "To-do updated", body = TodoDto),
        (status = 400, description = "Invalid to-do data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "To-do not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_todo(
    State(state): State<AppState>,
    session: Session,
    Path(todo_id): Path<i32>,
    Json(payload): Json<SaveTodoDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let todo = TodoService::new(&state.db)
        .update(user.id, todo_id, builder(payload))
        .await?;

    Ok((StatusCode::OK, Json(todo.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/todos/{todo_id}/complete",
    tag = TODO_TAG,
    params(
        ("todo_id" = i32, Path, description = "To-do ID")
    ),
    responses(
        (status = 200, description = "To-do completed", body = TodoDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "To-do not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn complete_todo(
    State(state): State<AppState>,
    session: Session,
    Path(todo_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let todo = TodoService::new(&state.db)
        .complete(user.id, todo_id)
        .await?;

    Ok((StatusCode::OK, Json(todo.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/todos/{todo_id}",
    tag = TODO_TAG,
    params(
        ("todo_id" = i32, Path, description = "To-do ID")
    ),
    responses(
        (status = 204, description = "To-do deleted"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "To-do not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_todo(
    State(state): State<AppState>,
    session: Session,
    Path(todo_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    TodoService::new(&state.db).delete(user.id, todo_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
