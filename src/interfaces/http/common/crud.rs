//! Handler bodies shared by every resource
//!
//! Each resource handler only picks the query or repository and the DTO
//! types; listing, creating, updating, deleting, logging and error
//! mapping happen here.

use axum::Json;
use tracing::{error, info, warn};

use super::ApiError;
use crate::config::StatusCodeMode;
use crate::domain::{EntityQuery, EntityRepository};
use crate::shared::errors::DomainError;

fn fail(mode: StatusCodeMode, action: &str, label: &str, err: DomainError) -> ApiError {
    if err.is_not_found() {
        warn!("{} {} rejected: {}", action, label, err);
    } else {
        error!("{} {} failed: {}", action, label, err);
    }
    ApiError::new(mode, err)
}

pub async fn list<T, R>(
    mode: StatusCodeMode,
    query: &dyn EntityQuery<T>,
    label: &str,
) -> Result<Json<Vec<R>>, ApiError>
where
    R: From<T>,
{
    let items = query
        .get_all()
        .await
        .map_err(|e| fail(mode, "list", label, e))?;
    info!("listed {} {}", items.len(), label);
    Ok(Json(items.into_iter().map(R::from).collect()))
}

pub async fn create<T, R>(
    mode: StatusCodeMode,
    repo: &dyn EntityRepository<T>,
    item: T,
    label: &str,
) -> Result<Json<R>, ApiError>
where
    R: From<T>,
{
    let created = repo
        .create(item)
        .await
        .map_err(|e| fail(mode, "create", label, e))?;
    info!("{} created", label);
    Ok(Json(R::from(created)))
}

pub async fn update<T, R>(
    mode: StatusCodeMode,
    repo: &dyn EntityRepository<T>,
    item: T,
    label: &str,
) -> Result<Json<R>, ApiError>
where
    R: From<T>,
{
    let updated = repo
        .update(item)
        .await
        .map_err(|e| fail(mode, "update", label, e))?;
    info!("{} updated", label);
    Ok(Json(R::from(updated)))
}

pub async fn delete<T>(
    mode: StatusCodeMode,
    repo: &dyn EntityRepository<T>,
    id: i32,
    label: &str,
) -> Result<Json<bool>, ApiError> {
    let deleted = repo
        .delete(id)
        .await
        .map_err(|e| fail(mode, "delete", label, e))?;
    info!("{} {} deleted", label, id);
    Ok(Json(deleted))
}
