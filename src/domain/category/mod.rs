//! Category aggregate

pub mod model;

pub use model::Category;
