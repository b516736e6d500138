//! Restaurant aggregate

pub mod model;

pub use model::Restaurant;
