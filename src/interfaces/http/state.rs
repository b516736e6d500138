//! Shared handler state

use std::sync::Arc;
use std::time::Instant;

use sea_orm::DatabaseConnection;

use crate::config::StatusCodeMode;
use crate::domain::RepositoryProvider;

#[derive(Clone)]
pub struct AppState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub db: DatabaseConnection,
    pub status_codes: StatusCodeMode,
    pub started_at: Arc<Instant>,
}

impl AppState {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        db: DatabaseConnection,
        status_codes: StatusCodeMode,
    ) -> Self {
        Self {
            repos,
            db,
            status_codes,
            started_at: Arc::new(Instant::now()),
        }
    }
}
