//! Category REST API handlers

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};
use crate::interfaces::http::common::{crud, ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::AppState;

#[utoipa::path(
    get,
    path = "/api/category",
    tag = "Categories",
    responses(
        (status = 200, description = "All categories", body = Vec<CategoryResponse>),
        (status = 500, description = "Storage failure", body = ApiResponse<String>)
    )
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    crud::list(state.status_codes, state.repos.category_query(), "categories").await
}

#[utoipa::path(
    post,
    path = "/api/category",
    tag = "Categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, description = "Created", body = CategoryResponse),
        (status = 400, description = "Malformed body", body = ApiResponse<String>),
        (status = 500, description = "Storage failure", body = ApiResponse<String>)
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateCategoryRequest>,
) -> Result<Json<CategoryResponse>, ApiError> {
    crud::create(state.status_codes, state.repos.categories(), req.into(), "category").await
}

#[utoipa::path(
    put,
    path = "/api/category",
    tag = "Categories",
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Updated", body = CategoryResponse),
        (status = 404, description = "No category with that id", body = ApiResponse<String>),
        (status = 422, description = "Invalid id", body = ApiResponse<String>)
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<UpdateCategoryRequest>,
) -> Result<Json<CategoryResponse>, ApiError> {
    crud::update(state.status_codes, state.repos.categories(), req.into(), "category").await
}

#[utoipa::path(
    delete,
    path = "/api/category/{id}",
    tag = "Categories",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Deleted", body = bool),
        (status = 404, description = "No category with that id", body = ApiResponse<String>)
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<bool>, ApiError> {
    crud::delete(state.status_codes, state.repos.categories(), id, "category").await
}
