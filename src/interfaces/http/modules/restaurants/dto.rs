//! Restaurant DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Restaurant;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantResponse {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub longitude: Decimal,
    pub latitude: Decimal,
    pub category_id: i32,
}

impl From<Restaurant> for RestaurantResponse {
    fn from(r: Restaurant) -> Self {
        Self {
            id: r.id,
            name: r.name,
            phone: r.phone,
            address: r.address,
            longitude: r.longitude,
            latitude: r.latitude,
            category_id: r.category_id,
        }
    }
}

/// New restaurant. An `id` in the body is ignored; `categoryId` is not
/// checked against existing categories.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRestaurantRequest {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub longitude: Decimal,
    pub latitude: Decimal,
    pub category_id: i32,
}

impl From<CreateRestaurantRequest> for Restaurant {
    fn from(req: CreateRestaurantRequest) -> Self {
        Restaurant {
            id: 0,
            name: req.name,
            phone: req.phone,
            address: req.address,
            longitude: req.longitude,
            latitude: req.latitude,
            category_id: req.category_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRestaurantRequest {
    #[validate(range(min = 1, message = "id must be a positive integer"))]
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub longitude: Decimal,
    pub latitude: Decimal,
    pub category_id: i32,
}

impl From<UpdateRestaurantRequest> for Restaurant {
    fn from(req: UpdateRestaurantRequest) -> Self {
        Restaurant {
            id: req.id,
            name: req.name,
            phone: req.phone,
            address: req.address,
            longitude: req.longitude,
            latitude: req.latitude,
            category_id: req.category_id,
        }
    }
}
