//! Category DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Category;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}

/// New category. An `id` in the body is ignored.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: String,
}

impl From<CreateCategoryRequest> for Category {
    fn from(req: CreateCategoryRequest) -> Self {
        Category {
            id: 0,
            name: req.name,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    #[validate(range(min = 1, message = "id must be a positive integer"))]
    pub id: i32,
    pub name: String,
}

impl From<UpdateCategoryRequest> for Category {
    fn from(req: UpdateCategoryRequest) -> Self {
        Category {
            id: req.id,
            name: req.name,
        }
    }
}
