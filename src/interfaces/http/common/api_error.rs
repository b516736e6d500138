//! Domain error to HTTP response mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::ApiResponse;
use crate::config::StatusCodeMode;
use crate::shared::errors::DomainError;

/// A domain failure on its way out of a handler, carrying the status-code
/// mode the service runs in.
#[derive(Debug)]
pub struct ApiError {
    mode: StatusCodeMode,
    error: DomainError,
}

impl ApiError {
    pub fn new(mode: StatusCodeMode, error: DomainError) -> Self {
        Self { mode, error }
    }

    pub fn status(&self) -> StatusCode {
        match self.mode {
            StatusCodeMode::Legacy => StatusCode::INTERNAL_SERVER_ERROR,
            StatusCodeMode::Typed => match &self.error {
                DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
                DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
                DomainError::Storage { .. } | DomainError::Infra(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self.mode {
            // Old clients only ever saw a bare 500.
            StatusCodeMode::Legacy => status.into_response(),
            StatusCodeMode::Typed => {
                (status, Json(ApiResponse::<()>::error(self.error.to_string()))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::InfraError;

    fn db_failure() -> DomainError {
        DomainError::storage(
            "failed to create category",
            InfraError::Database(sea_orm::DbErr::Custom("disk full".into())),
        )
    }

    #[test]
    fn typed_mode_distinguishes_kinds() {
        let typed = |e| ApiError::new(StatusCodeMode::Typed, e).status();

        assert_eq!(
            typed(DomainError::not_found("Category", 7)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            typed(DomainError::Validation("name is required".into())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(typed(db_failure()), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn legacy_mode_is_always_500() {
        for err in [
            DomainError::not_found("Product", 3),
            DomainError::Validation("bad".into()),
            db_failure(),
        ] {
            let resp = ApiError::new(StatusCodeMode::Legacy, err).into_response();
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[tokio::test]
    async fn typed_body_carries_message() {
        let resp =
            ApiError::new(StatusCodeMode::Typed, DomainError::not_found("User", 12)).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("12"));
    }

    #[tokio::test]
    async fn legacy_body_is_empty() {
        let resp =
            ApiError::new(StatusCodeMode::Legacy, DomainError::not_found("User", 12)).into_response();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty());
    }
}
