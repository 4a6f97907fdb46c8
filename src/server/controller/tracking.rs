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
        price::{TrackProductDto, TrackedProductDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::tracking::TrackingService,
        state::AppState,
    },
};

/// Tag for grouping product tracking endpoints in OpenAPI documentation
pub static TRACKING_TAG: &str = "tracking";

/// Get the products the signed-in user tracks, with the current lowest price.
#[utoipa::path(
    get,
    path = "/api/tracked-products",
    tag = TRACKING_TAG,
    responses(
        (status = 200, description = "Tracked products", body = Vec<TrackedProductDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tracked_products(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let tracked = TrackingService::new(&state.db).get_for_user(user.id).await?;

    let dtos: Vec<TrackedProductDto> = tracked.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Start tracking a product, or change the target price of an existing entry.
///
/// # Arguments
/// - `product_id` - Product to track
/// - `payload` - Optional target price; recording a price at or below it sends an alert
///
/// # Returns
/// - `200 OK` - The tracking entry
/// - `400 Bad Request` - Target price rejected
/// - `404 Not Found` - Product does not exist
#[utoipa::path(
    put,
    path = "/api/tracked-products/{product_id}",
    tag = TRACKING_TAG,
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    request_body = TrackProductDto,
    responses(
        (status = 200, description = "Product tracked", body = TrackedProductDto),
        (status = 400, description = "Invalid target price", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn track_product(
    State(state): State<AppState>,
    session: Session,
    Path(product_id): Path<i32>,
    Json(payload): Json<TrackProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let tracked = TrackingService::new(&state.db)
        .track(user.id, product_id, payload.target_price)
        .await?;

    Ok((StatusCode::OK, Json(tracked.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/tracked-products/{product_id}",
    tag = TRACKING_TAG,
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product no longer tracked"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Product is not tracked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn untrack_product(
    State(state): State<AppState>,
    session: Session,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    TrackingService::new(&state.db)
        .untrack(user.id, product_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
