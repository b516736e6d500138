//! Database entities module

pub mod category;
pub mod choice;
pub mod product;
pub mod restaurant;
pub mod user;

pub use category::Entity as Category;
pub use choice::Entity as Choice;
pub use product::Entity as Product;
pub use restaurant::Entity as Restaurant;
pub use user::Entity as User;
