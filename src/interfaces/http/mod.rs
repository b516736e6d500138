//! HTTP REST API interfaces
//!
//! - `common`: response envelope, error mapping, validated JSON, CRUD bodies
//! - `modules`: one module per resource plus health and request id
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;
pub mod state;

pub use router::create_api_router;
pub use state::AppState;
