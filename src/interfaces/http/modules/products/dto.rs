//! Product DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Product;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i32,
    pub restaurant_id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: String,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            restaurant_id: p.restaurant_id,
            name: p.name,
            description: p.description,
            price: p.price,
            image_url: p.image_url,
        }
    }
}

/// New product. An `id` in the body is ignored.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub restaurant_id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: String,
}

impl From<CreateProductRequest> for Product {
    fn from(req: CreateProductRequest) -> Self {
        Product {
            id: 0,
            restaurant_id: req.restaurant_id,
            name: req.name,
            description: req.description,
            price: req.price,
            image_url: req.image_url,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[validate(range(min = 1, message = "id must be a positive integer"))]
    pub id: i32,
    pub restaurant_id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: String,
}

impl From<UpdateProductRequest> for Product {
    fn from(req: UpdateProductRequest) -> Self {
        Product {
            id: req.id,
            restaurant_id: req.restaurant_id,
            name: req.name,
            description: req.description,
            price: req.price,
            image_url: req.image_url,
        }
    }
}
