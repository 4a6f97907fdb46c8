use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        price::{PriceDto, RecordPriceDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::price::PriceHistoryQuery,
        service::price::PriceService,
        state::AppState,
        validation::catalog::PriceBuilder,
    },
};

/// Tag for grouping price endpoints in OpenAPI documentation
pub static PRICE_TAG: &str = "price";

#[derive(Deserialize)]
pub struct PriceHistoryParams {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Record the price of a product at a store.
///
/// Users tracking the product whose target price is met receive an alert.
///
/// # Access Control
/// - Any signed-in user
///
/// # Arguments
/// - `payload` - Product, store, amount and an optional date (defaults to today)
///
/// # Returns
/// - `201 Created` - The recorded price
/// - `400 Bad Request` - Amount not positive, more than two decimals or a future date
/// - `404 Not Found` - Product or store does not exist
/// - `409 Conflict` - A price for that product, store and day already exists
#[utoipa::path(
    post,
    path = "/api/prices",
    tag = PRICE_TAG,
    request_body = RecordPriceDto,
    responses(
        (status = 201, description = "Price recorded", body = PriceDto),
        (status = 400, description = "Invalid price data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Product or store not found", body = ErrorDto),
        (status = 409, description = "Price already recorded for that day", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_price(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RecordPriceDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let builder = PriceBuilder::new()
        .product_id(payload.product_id)
        .store_id(payload.store_id)
        .amount(payload.amount)
        .recorded_on(payload.recorded_on);

    let price = PriceService::new(&state.db, &state.email)
        .record(builder)
        .await?;

    Ok((StatusCode::CREATED, Json(price.into_dto())))
}

/// Get the price history of a product, optionally within a date window.
#[utoipa::path(
    get,
    path = "/api/products/{product_id}/prices",
    tag = PRICE_TAG,
    params(
        ("product_id" = i32, Path, description = "Product ID"),
        ("from" = Option<NaiveDate>, Query, description = "First day to include"),
        ("to" = Option<NaiveDate>, Query, description = "Last day to include")
    ),
    responses(
        (status = 200, description = "Prices ordered by date then store", body = Vec<PriceDto>),
        (status = 400, description = "`from` is after `to`", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_price_history(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
    Query(params): Query<PriceHistoryParams>,
) -> Result<impl IntoResponse, AppError> {
    let prices = PriceService::new(&state.db, &state.email)
        .history(
            product_id,
            PriceHistoryQuery {
                from: params.from,
                to: params.to,
            },
        )
        .await?;

    let dtos: Vec<PriceDto> = prices.into_iter().map(|price| price.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Delete a recorded price.
///
/// # Access Control
/// - `Admin` - Only admins can remove price observations
#[utoipa::path(
    delete,
    path = "/api/prices/{price_id}",
    tag = PRICE_TAG,
    params(
        ("price_id" = i32, Path, description = "Price ID")
    ),
    responses(
        (status = 204, description = "Price deleted"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Price not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_price(
    State(state): State<AppState>,
    session: Session,
    Path(price_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    PriceService::new(&state.db, &state.email)
        .delete(price_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
