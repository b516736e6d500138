//! User domain entity

use rust_decimal::Decimal;

/// An app user with a home location.
///
/// `password_hash` is stored exactly as supplied by the client. It is
/// expected to already be a hash; nothing here hashes or checks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub address: String,
    pub longitude: Decimal,
    pub latitude: Decimal,
}
