pub mod category;
pub mod choice;
pub mod product;
pub mod repositories;
pub mod restaurant;
pub mod user;

// Re-export commonly used types
pub use category::Category;
pub use choice::Choice;
pub use product::Product;
pub use repositories::{DomainResult, EntityQuery, EntityRepository, RepositoryProvider};
pub use restaurant::Restaurant;
pub use user::User;

pub use crate::shared::errors::DomainError;
