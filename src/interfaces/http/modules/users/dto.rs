//! User DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::User;

/// User as stored. `passwordHash` is returned as-is.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub address: String,
    pub longitude: Decimal,
    pub latitude: Decimal,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            password_hash: u.password_hash,
            address: u.address,
            longitude: u.longitude,
            latitude: u.latitude,
        }
    }
}

/// New user. An `id` in the body is ignored. `passwordHash` should
/// already be hashed by the client; it is stored verbatim.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub address: String,
    pub longitude: Decimal,
    pub latitude: Decimal,
}

impl From<CreateUserRequest> for User {
    fn from(req: CreateUserRequest) -> Self {
        User {
            id: 0,
            name: req.name,
            email: req.email,
            password_hash: req.password_hash,
            address: req.address,
            longitude: req.longitude,
            latitude: req.latitude,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(range(min = 1, message = "id must be a positive integer"))]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub address: String,
    pub longitude: Decimal,
    pub latitude: Decimal,
}

impl From<UpdateUserRequest> for User {
    fn from(req: UpdateUserRequest) -> Self {
        User {
            id: req.id,
            name: req.name,
            email: req.email,
            password_hash: req.password_hash,
            address: req.address,
            longitude: req.longitude,
            latitude: req.latitude,
        }
    }
}
