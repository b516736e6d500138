//! Product REST API handlers

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use crate::interfaces::http::common::{crud, ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::AppState;

#[utoipa::path(
    get,
    path = "/api/product",
    tag = "Products",
    responses(
        (status = 200, description = "All products", body = Vec<ProductResponse>),
        (status = 500, description = "Storage failure", body = ApiResponse<String>)
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    crud::list(state.status_codes, state.repos.product_query(), "products").await
}

#[utoipa::path(
    post,
    path = "/api/product",
    tag = "Products",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Created", body = ProductResponse),
        (status = 400, description = "Malformed body", body = ApiResponse<String>),
        (status = 500, description = "Storage failure", body = ApiResponse<String>)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateProductRequest>,
) -> Result<Json<ProductResponse>, ApiError> {
    crud::create(state.status_codes, state.repos.products(), req.into(), "product").await
}

#[utoipa::path(
    put,
    path = "/api/product",
    tag = "Products",
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated", body = ProductResponse),
        (status = 404, description = "No product with that id", body = ApiResponse<String>),
        (status = 422, description = "Invalid id", body = ApiResponse<String>)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, ApiError> {
    crud::update(state.status_codes, state.repos.products(), req.into(), "product").await
}

#[utoipa::path(
    delete,
    path = "/api/product/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Deleted", body = bool),
        (status = 404, description = "No product with that id", body = ApiResponse<String>)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<bool>, ApiError> {
    crud::delete(state.status_codes, state.repos.products(), id, "product").await
}
