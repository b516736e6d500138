//! User REST API handlers

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::interfaces::http::common::{crud, ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::AppState;

#[utoipa::path(
    get,
    path = "/api/user",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<UserResponse>),
        (status = 500, description = "Storage failure", body = ApiResponse<String>)
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    crud::list(state.status_codes, state.repos.user_query(), "users").await
}

#[utoipa::path(
    post,
    path = "/api/user",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Created", body = UserResponse),
        (status = 400, description = "Malformed body", body = ApiResponse<String>),
        (status = 500, description = "Storage failure", body = ApiResponse<String>)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    crud::create(state.status_codes, state.repos.users(), req.into(), "user").await
}

#[utoipa::path(
    put,
    path = "/api/user",
    tag = "Users",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated", body = UserResponse),
        (status = 404, description = "No user with that id", body = ApiResponse<String>),
        (status = 422, description = "Invalid id", body = ApiResponse<String>)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    crud::update(state.status_codes, state.repos.users(), req.into(), "user").await
}

#[utoipa::path(
    delete,
    path = "/api/user/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Deleted", body = bool),
        (status = 404, description = "No user with that id", body = ApiResponse<String>)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<bool>, ApiError> {
    crud::delete(state.status_codes, state.repos.users(), id, "user").await
}
