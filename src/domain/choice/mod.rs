//! Choice aggregate
//!
//! A user picking a product. The table exists so the schema is complete,
//! but no query, repository or route reads or writes it yet; recording
//! choices is future work for the matching feature.

pub mod model;

pub use model::Choice;
