//! Repository traits for the domain layer
//!
//! Contains:
//! - `EntityQuery`: read side, one per table
//! - `EntityRepository`: write side, one per table
//! - `RepositoryProvider`: unified access to every query and repository
//! - `DomainResult`: standard result type for domain operations

use async_trait::async_trait;

use super::category::Category;
use super::product::Product;
use super::restaurant::Restaurant;
use super::user::User;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Read-only access to every row of one table.
#[async_trait]
pub trait EntityQuery<T>: Send + Sync {
    /// All rows, in whatever order the database yields them.
    ///
    /// Storage errors come back unwrapped as [`DomainError::Infra`].
    async fn get_all(&self) -> DomainResult<Vec<T>>;
}

/// Create / update / delete against one table keyed by an integer id.
#[async_trait]
pub trait EntityRepository<T>: Send + Sync {
    /// Inserts `item` ignoring its id and returns it with the id the
    /// database assigned.
    async fn create(&self, item: T) -> DomainResult<T>;

    /// Overwrites the row with `item`'s id. Fails with
    /// [`DomainError::NotFound`] when no such row exists.
    async fn update(&self, item: T) -> DomainResult<T>;

    /// Removes the row with `id`. Fails with [`DomainError::NotFound`]
    /// when no such row exists.
    async fn delete(&self, id: i32) -> DomainResult<bool>;
}

// ── RepositoryProvider ──────────────────────────────────────────

/// Provides access to all domain queries and repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let all = repos.category_query().get_all().await?;
///     let created = repos.categories().create(category).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn category_query(&self) -> &dyn EntityQuery<Category>;
    fn categories(&self) -> &dyn EntityRepository<Category>;

    fn restaurant_query(&self) -> &dyn EntityQuery<Restaurant>;
    fn restaurants(&self) -> &dyn EntityRepository<Restaurant>;

    fn product_query(&self) -> &dyn EntityQuery<Product>;
    fn products(&self) -> &dyn EntityRepository<Product>;

    fn user_query(&self) -> &dyn EntityQuery<User>;
    fn users(&self) -> &dyn EntityRepository<User>;
}
