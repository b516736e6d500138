//! Generic SeaORM write side
//!
//! Update and delete are single statements filtered by id; a zero
//! `rows_affected` is reported as not-found, so there is no window
//! between checking for the row and writing it.

use std::marker::PhantomData;

use async_trait::async_trait;
use log::info;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PrimaryKeyTrait, QueryFilter};

use super::mapping::TableMapping;
use crate::domain::{DomainResult, EntityRepository};
use crate::shared::errors::DomainError;

pub struct SeaOrmTableRepository<E> {
    db: DatabaseConnection,
    _entity: PhantomData<fn() -> E>,
}

impl<E> SeaOrmTableRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E> EntityRepository<E::Domain> for SeaOrmTableRepository<E>
where
    E: TableMapping,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
{
    async fn create(&self, item: E::Domain) -> DomainResult<E::Domain> {
        let result = E::insert(E::to_active(&item))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::storage(format!("failed to create {}", E::LABEL), e))?;

        let id = result.last_insert_id;
        info!("{} created: id={}", E::ENTITY, id);
        Ok(E::with_id(item, id))
    }

    async fn update(&self, item: E::Domain) -> DomainResult<E::Domain> {
        let id = E::id_of(&item);
        let result = E::update_many()
            .set(E::to_active(&item))
            .filter(E::id_column().eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                DomainError::storage(format!("failed to update {} with id {}", E::LABEL, id), e)
            })?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found(E::ENTITY, id));
        }

        info!("{} updated: id={}", E::ENTITY, id);
        Ok(item)
    }

    async fn delete(&self, id: i32) -> DomainResult<bool> {
        let result = E::delete_many()
            .filter(E::id_column().eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                DomainError::storage(format!("failed to delete {} with id {}", E::LABEL, id), e)
            })?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found(E::ENTITY, id));
        }

        info!("{} deleted: id={}", E::ENTITY, id);
        Ok(true)
    }
}
