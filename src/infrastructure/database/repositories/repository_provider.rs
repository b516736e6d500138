//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::{
    Category, EntityQuery, EntityRepository, Product, RepositoryProvider, Restaurant, User,
};

use super::category_repository::{SeaOrmCategoryQuery, SeaOrmCategoryRepository};
use super::product_repository::{SeaOrmProductQuery, SeaOrmProductRepository};
use super::restaurant_repository::{SeaOrmRestaurantQuery, SeaOrmRestaurantRepository};
use super::user_repository::{SeaOrmUserQuery, SeaOrmUserRepository};

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-table query and repository
/// accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let all = repos.restaurant_query().get_all().await?;
/// repos.restaurants().delete(7).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    category_query: SeaOrmCategoryQuery,
    categories: SeaOrmCategoryRepository,
    restaurant_query: SeaOrmRestaurantQuery,
    restaurants: SeaOrmRestaurantRepository,
    product_query: SeaOrmProductQuery,
    products: SeaOrmProductRepository,
    user_query: SeaOrmUserQuery,
    users: SeaOrmUserRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            category_query: SeaOrmCategoryQuery::new(db.clone()),
            categories: SeaOrmCategoryRepository::new(db.clone()),
            restaurant_query: SeaOrmRestaurantQuery::new(db.clone()),
            restaurants: SeaOrmRestaurantRepository::new(db.clone()),
            product_query: SeaOrmProductQuery::new(db.clone()),
            products: SeaOrmProductRepository::new(db.clone()),
            user_query: SeaOrmUserQuery::new(db.clone()),
            users: SeaOrmUserRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn category_query(&self) -> &dyn EntityQuery<Category> {
        &self.category_query
    }

    fn categories(&self) -> &dyn EntityRepository<Category> {
        &self.categories
    }

    fn restaurant_query(&self) -> &dyn EntityQuery<Restaurant> {
        &self.restaurant_query
    }

    fn restaurants(&self) -> &dyn EntityRepository<Restaurant> {
        &self.restaurants
    }

    fn product_query(&self) -> &dyn EntityQuery<Product> {
        &self.product_query
    }

    fn products(&self) -> &dyn EntityRepository<Product> {
        &self.products
    }

    fn user_query(&self) -> &dyn EntityQuery<User> {
        &self.user_query
    }

    fn users(&self) -> &dyn EntityRepository<User> {
        &self.users
    }
}
