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
        catalog::{PaginatedProductsDto, ProductDetailDto, ProductDto, SaveProductDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::catalog::ProductQuery,
        service::product::ProductService,
        state::AppState,
        validation::catalog::ProductBuilder,
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

#[derive(Deserialize)]
pub struct ProductListParams {
    pub search: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "super::default_entries")]
    pub entries: u64,
}

fn builder(payload: SaveProductDto) -> ProductBuilder {
    ProductBuilder::new()
        .name(payload.name)
        .brand(payload.brand)
        .category(payload.category)
        .description(payload.description)
}

/// Search the product catalog.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `params` - Optional name search, exact category, page and entries per page
///
/// # Returns
/// - `200 OK` - Page of products ordered by name
#[utoipa::path(
    get,
    path = "/api/products",
    tag = PRODUCT_TAG,
    params(
        ("search" = Option<String>, Query, description = "Substring of the product name"),
        ("category" = Option<String>, Query, description = "Exact category"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of products", body = PaginatedProductsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    Query(params): Query<ProductListParams>,
) -> Result<impl IntoResponse, AppError> {
    let products = ProductService::new(&state.db)
        .get_paginated(ProductQuery {
            search: params.search,
            category: params.category,
            page: params.page,
            per_page: params.entries,
        })
        .await?;

    Ok((StatusCode::OK, Json(products.into_dto())))
}

/// Get a product with the latest price at each store.
#[utoipa::path(
    get,
    path = "/api/products/{product_id}",
    tag = PRODUCT_TAG,
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product with current prices", body = ProductDetailDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let detail = ProductService::new(&state.db).get_detail(product_id).await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Create a new product.
///
/// # Access Control
/// - `Admin` - Only admins can manage the catalog
///
/// # Returns
/// - `201 Created` - The created product
/// - `400 Bad Request` - Invalid fields
/// - `409 Conflict` - Name already used by another product
#[utoipa::path(
    post,
    path = "/api/products",
    tag = PRODUCT_TAG,
    request_body = SaveProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductDto),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Product name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let product = ProductService::new(&state.db)
        .create(builder(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(product.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/products/{product_id}",
    tag = PRODUCT_TAG,
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    request_body = SaveProductDto,
    responses(
        (status = 200, description = "Product updated", body = ProductDto),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 409, description = "Product name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    session: Session,
    Path(product_id): Path<i32>,
    Json(payload): Json<SaveProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let product = ProductService::new(&state.db)
        .update(product_id, builder(payload))
        .await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// Delete a product along with its prices and tracking entries.
#[utoipa::path(
    delete,
    path = "/api/products/{product_id}",
    tag = PRODUCT_TAG,
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    session: Session,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ProductService::new(&state.db).delete(product_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
