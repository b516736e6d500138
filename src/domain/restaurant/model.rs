//! Restaurant domain entity

use rust_decimal::Decimal;

/// A restaurant listed in the app.
///
/// `category_id` points at a [`Category`](crate::domain::Category) but is
/// not checked: a restaurant may be stored against a category that does
/// not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub address: String,
    /// Decimal degrees, no range enforced
    pub longitude: Decimal,
    /// Decimal degrees, no range enforced
    pub latitude: Decimal,
    pub category_id: i32,
}
