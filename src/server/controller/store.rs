use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        catalog::{SaveStoreDto, StoreDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::store::StoreService,
        state::AppState,
        validation::catalog::StoreBuilder,
    },
};

/// Tag for grouping store endpoints in OpenAPI documentation
pub static STORE_TAG: &str = "store";

fn builder(payload: SaveStoreDto) -> StoreBuilder {
    StoreBuilder::new()
        .name(payload.name)
        .address(payload.address)
        .website(payload.website)
}

/// Get all stores ordered by name.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/stores",
    tag = STORE_TAG,
    responses(
        (status = 200, description = "All stores", body = Vec<StoreDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stores(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let stores = StoreService::new(&state.db).get_all().await?;

    let dtos: Vec<StoreDto> = stores.into_iter().map(|store| store.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a single store.
#[utoipa::path(
    get,
    path = "/api/stores/{store_id}",
    tag = STORE_TAG,
    params(
        ("store_id" = i32, Path, description = "Store ID")
    ),
    responses(
        (status = 200, description = "Store found", body = StoreDto),
        (status = 404, description = "Store not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_store(
    State(state): State<AppState>,
    Path(store_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let store = StoreService::new(&state.db).get_by_id(store_id).await?;

    Ok((StatusCode::OK, Json(store.into_dto())))
}

/// Create a new store.
///
/// # Access Control
/// - `Admin` - Only admins can manage stores
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Store name, address and website
///
/// # Returns
/// - `201 Created` - The created store
/// - `400 Bad Request` - Invalid fields
/// - `409 Conflict` - Name already used by another store
#[utoipa::path(
    post,
    path = "/api/stores",
    tag = STORE_TAG,
    request_body = SaveStoreDto,
    responses(
        (status = 201, description = "Store created", body = StoreDto),
        (status = 400, description = "Invalid store data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Store name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_store(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveStoreDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let store = StoreService::new(&state.db).create(builder(payload)).await?;

    Ok((StatusCode::CREATED, Json(store.into_dto())))
}

/// Replace a store's details.
#[utoipa::path(
    put,
    path = "/api/stores/{store_id}",
    tag = STORE_TAG,
    params(
        ("store_id" = i32, Path, description = "Store ID")
    ),
    request_body = SaveStoreDto,
    responses(
        (status = 200, description = "Store updated", body = StoreDto),
        (status = 400, description = "Invalid store data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Store not found", body = ErrorDto),
        (status = 409, description = "Store name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_store(
    State(state): State<AppState>,
    session: Session,
    Path(store_id): Path<i32>,
    Json(payload): Json<SaveStoreDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let store = StoreService::new(&state.db)
        .update(store_id, builder(payload))
        .await?;

    Ok((StatusCode::OK, Json(store.into_dto())))
}

/// Delete a store. Stores with recorded prices cannot be deleted.
///
/// # Returns
/// - `204 No Content` - Store deleted
/// - `404 Not Found` - Store does not exist
/// - `409 Conflict` - Prices are still recorded at this store
#[utoipa::path(
    delete,
    path = "/api/stores/{store_id}",
    tag = STORE_TAG,
    params(
        ("store_id" = i32, Path, description = "Store ID")
    ),
    responses(
        (status = 204, description = "Store deleted"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Store not found", body = ErrorDto),
        (status = 409, description = "Store still has prices", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_store(
    State(state): State<AppState>,
    session: Session,
    Path(store_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    StoreService::new(&state.db).delete(store_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
