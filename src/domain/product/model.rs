//! Product domain entity

use rust_decimal::Decimal;

/// A dish or item on a restaurant's menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: i32,
    pub restaurant_id: i32,
    pub name: String,
    pub description: String,
    /// Expected to be non-negative; not enforced
    pub price: Decimal,
    pub image_url: String,
}
