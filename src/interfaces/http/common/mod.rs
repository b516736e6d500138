//! Shared HTTP building blocks: response envelope, error mapping,
//! validated JSON extraction and the generic CRUD handler bodies.

pub mod api_error;
pub mod api_response;
pub mod crud;
pub mod validated_json;

pub use api_error::ApiError;
pub use api_response::ApiResponse;
pub use validated_json::ValidatedJson;
