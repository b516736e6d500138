//! Category domain entity

/// Cuisine or venue category that restaurants are grouped under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    pub name: String,
}
