//! Choice entity for database
//!
//! Schema only; nothing reads or writes choices yet.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

use crate::domain::Choice;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "choices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub chosen_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Choice {
    fn from(m: Model) -> Self {
        Choice {
            id: m.id,
            user_id: m.user_id,
            product_id: m.product_id,
            chosen_at: m.chosen_at,
        }
    }
}
