//! Table mapping between SeaORM entities and domain types
//!
//! One implementation per table tells the generic query and repository
//! which column is the key, how to turn a row into a domain value and how
//! to turn a domain value into column assignments.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelBehavior, ActiveModelTrait, EntityTrait};

pub trait TableMapping: EntityTrait {
    /// Domain value stored in this table.
    type Domain: Clone + Send + Sync + 'static;

    /// Writable row for this table.
    type Active: ActiveModelTrait<Entity = Self> + ActiveModelBehavior + Send + 'static;

    /// Lower-case label used in log lines and error messages ("category").
    const LABEL: &'static str;

    /// Entity name reported in not-found errors ("Category").
    const ENTITY: &'static str;

    fn id_column() -> Self::Column;

    fn id_of(item: &Self::Domain) -> i32;

    fn with_id(item: Self::Domain, id: i32) -> Self::Domain;

    fn to_domain(model: Self::Model) -> Self::Domain;

    /// Every non-key column set from `item`; the key is left unset so the
    /// same value serves inserts and keyed updates.
    fn to_active(item: &Self::Domain) -> Self::Active;
}

// ── Decimal columns ─────────────────────────────────────────────
//
// Coordinates and prices are REAL columns; the domain keeps them as
// `Decimal`.

pub(crate) fn decimal_from_column(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

pub(crate) fn decimal_to_column(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_survives_real_column() {
        let price = Decimal::new(1250, 2); // 12.50
        assert_eq!(decimal_from_column(decimal_to_column(price)), price);

        let lon = Decimal::new(-7725, 2); // -77.25
        assert_eq!(decimal_from_column(decimal_to_column(lon)), lon);
    }
}
