//! Choice domain entity

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub chosen_at: DateTime<Utc>,
}
