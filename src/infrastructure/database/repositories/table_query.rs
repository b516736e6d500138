//! Generic SeaORM read side

use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use super::mapping::TableMapping;
use crate::domain::{DomainResult, EntityQuery};
use crate::shared::errors::{DomainError, InfraError};

/// `SELECT * FROM <table>` for any mapped table.
pub struct SeaOrmTableQuery<E> {
    db: DatabaseConnection,
    _entity: PhantomData<fn() -> E>,
}

impl<E> SeaOrmTableQuery<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E> EntityQuery<E::Domain> for SeaOrmTableQuery<E>
where
    E: TableMapping,
    E::Model: Send,
{
    async fn get_all(&self) -> DomainResult<Vec<E::Domain>> {
        let models = E::find()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Infra(InfraError::from(e)))?;
        Ok(models.into_iter().map(E::to_domain).collect())
    }
}
