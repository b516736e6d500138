//! # FoodieMatch
//!
//! Restaurant discovery REST API: list, create, update and delete
//! categories, restaurants, products and users stored in SQLite.
//!
//! ## Architecture
//!
//! - **domain**: entities and the query / repository traits
//! - **infrastructure**: SeaORM entities, migrations and the generic
//!   table-driven repositories
//! - **interfaces**: axum HTTP router, handlers and DTOs
//! - **server**: process lifecycle (pool, migrations, serve, shutdown)
//! - **config**: TOML configuration

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
