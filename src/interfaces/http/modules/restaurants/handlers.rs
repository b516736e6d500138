//! Restaurant REST API handlers

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::{CreateRestaurantRequest, RestaurantResponse, UpdateRestaurantRequest};
use crate::interfaces::http::common::{crud, ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::AppState;

#[utoipa::path(
    get,
    path = "/api/restaurant",
    tag = "Restaurants",
    responses(
        (status = 200, description = "All restaurants", body = Vec<RestaurantResponse>),
        (status = 500, description = "Storage failure", body = ApiResponse<String>)
    )
)]
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantResponse>>, ApiError> {
    crud::list(state.status_codes, state.repos.restaurant_query(), "restaurants").await
}

#[utoipa::path(
    post,
    path = "/api/restaurant",
    tag = "Restaurants",
    request_body = CreateRestaurantRequest,
    responses(
        (status = 200, description = "Created", body = RestaurantResponse),
        (status = 400, description = "Malformed body", body = ApiResponse<String>),
        (status = 500, description = "Storage failure", body = ApiResponse<String>)
    )
)]
pub async fn create_restaurant(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateRestaurantRequest>,
) -> Result<Json<RestaurantResponse>, ApiError> {
    crud::create(state.status_codes, state.repos.restaurants(), req.into(), "restaurant").await
}

#[utoipa::path(
    put,
    path = "/api/restaurant",
    tag = "Restaurants",
    request_body = UpdateRestaurantRequest,
    responses(
        (status = 200, description = "Updated", body = RestaurantResponse),
        (status = 404, description = "No restaurant with that id", body = ApiResponse<String>),
        (status = 422, description = "Invalid id", body = ApiResponse<String>)
    )
)]
pub async fn update_restaurant(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<UpdateRestaurantRequest>,
) -> Result<Json<RestaurantResponse>, ApiError> {
    crud::update(state.status_codes, state.repos.restaurants(), req.into(), "restaurant").await
}

#[utoipa::path(
    delete,
    path = "/api/restaurant/{id}",
    tag = "Restaurants",
    params(("id" = i32, Path, description = "Restaurant ID")),
    responses(
        (status = 200, description = "Deleted", body = bool),
        (status = 404, description = "No restaurant with that id", body = ApiResponse<String>)
    )
)]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<bool>, ApiError> {
    crud::delete(state.status_codes, state.repos.restaurants(), id, "restaurant").await
}
