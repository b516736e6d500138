//! Validated JSON extractor for Axum
//!
//! `ValidatedJson<T>` deserializes like `axum::Json<T>` and then runs
//! `validator::Validate::validate()`. Bodies that do not deserialize
//! (bad syntax, missing fields, wrong content type) get 400, bodies
//! that parse but fail validation get 422; both carry an [`ApiResponse`]
//! error envelope regardless of the status-code mode.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

use super::ApiResponse;

/// ```ignore
/// async fn update_category(
///     State(state): State<AppState>,
///     ValidatedJson(req): ValidatedJson<UpdateCategoryRequest>,
/// ) -> Result<Json<CategoryResponse>, ApiError> { ... }
/// ```
pub struct ValidatedJson<T>(pub T);

pub enum ValidatedJsonRejection {
    JsonError(JsonRejection),
    ValidationError(validator::ValidationErrors),
}

impl ValidatedJsonRejection {
    /// `field: message` pairs, sorted by field so the text is stable.
    fn validation_message(errors: &validator::ValidationErrors) -> String {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let parts: Vec<String> = fields
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let msg = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    format!("{}: {}", field, msg)
                })
            })
            .collect();

        if parts.is_empty() {
            "Validation failed".to_string()
        } else {
            parts.join("; ")
        }
    }
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            Self::JsonError(rejection) => {
                debug!("rejected request body: {}", rejection);
                let body = ApiResponse::<()>::error(format!("Invalid JSON: {}", rejection));
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            Self::ValidationError(errors) => {
                let message = Self::validation_message(&errors);
                debug!("request body failed validation: {}", message);
                let body = ApiResponse::<()>::error(message);
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
        }
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(
        req: axum::extract::Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::JsonError)?;

        value
            .validate()
            .map_err(ValidatedJsonRejection::ValidationError)?;

        Ok(ValidatedJson(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::put;
    use axum::Router;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Debug, Deserialize, Validate)]
    struct Rename {
        #[validate(range(min = 1, message = "id must be a positive integer"))]
        id: i32,
        #[allow(dead_code)]
        name: String,
    }

    async fn handler(ValidatedJson(body): ValidatedJson<Rename>) -> String {
        body.id.to_string()
    }

    async fn send(body: Body) -> (StatusCode, Vec<u8>) {
        use tower::Service;
        let mut svc = Router::new().route("/rename", put(handler)).into_service();
        let req = Request::builder()
            .method("PUT")
            .uri("/rename")
            .header("content-type", "application/json")
            .body(body)
            .unwrap();
        let resp = svc.call(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn valid_body_reaches_handler() {
        let (status, body) = send(Body::from(r#"{"id": 3, "name": "Pizza"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"3");
    }

    #[tokio::test]
    async fn truncated_json_is_400() {
        let (status, body) = send(Body::from(r#"{"id": 3, "#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let err: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(err["success"], false);
    }

    #[tokio::test]
    async fn non_positive_id_is_422_with_field_message() {
        let (status, body) = send(Body::from(r#"{"id": 0, "name": "Pizza"}"#)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let err: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(err["error"], "id: id must be a positive integer");
    }
}
