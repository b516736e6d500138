//! Database repository implementations
//!
//! One generic query and one generic repository, instantiated per table
//! through [`TableMapping`], plus the unified RepositoryProvider.

pub mod category_repository;
pub mod mapping;
pub mod product_repository;
pub mod repository_provider;
pub mod restaurant_repository;
pub mod table_query;
pub mod table_repository;
pub mod user_repository;

pub use mapping::TableMapping;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use table_query::SeaOrmTableQuery;
pub use table_repository::SeaOrmTableRepository;
