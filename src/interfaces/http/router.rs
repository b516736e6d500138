//! API Router with Swagger UI

use axum::{
    middleware,
    routing::{delete, get},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::ApiResponse;
use super::modules::request_id::request_id_middleware;
use super::modules::{categories, health, products, restaurants, users};
use super::AppState;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Categories
        categories::list_categories,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        // Restaurants
        restaurants::list_restaurants,
        restaurants::create_restaurant,
        restaurants::update_restaurant,
        restaurants::delete_restaurant,
        // Products
        products::list_products,
        products::create_product,
        products::update_product,
        products::delete_product,
        // Users
        users::list_users,
        users::create_user,
        users::update_user,
        users::delete_user,
    ),
    components(
        schemas(
            ApiResponse<String>,
            health::HealthResponse,
            health::ComponentHealth,
            categories::CategoryResponse,
            categories::CreateCategoryRequest,
            categories::UpdateCategoryRequest,
            restaurants::RestaurantResponse,
            restaurants::CreateRestaurantRequest,
            restaurants::UpdateRestaurantRequest,
            products::ProductResponse,
            products::CreateProductRequest,
            products::UpdateProductRequest,
            users::UserResponse,
            users::CreateUserRequest,
            users::UpdateUserRequest,
        )
    ),
    tags(
        (name = "Health", description = "Service and database health"),
        (name = "Categories", description = "Restaurant categories"),
        (name = "Restaurants", description = "Restaurants with location and category"),
        (name = "Products", description = "Menu items offered by restaurants"),
        (name = "Users", description = "App users with home location"),
    ),
    info(
        title = "FoodieMatch API",
        version = "1.0.0",
        description = "Restaurant discovery CRUD API"
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes.
///
/// `swagger` mounts Swagger UI at `/docs` and the document at
/// `/api-doc/openapi.json`.
pub fn create_api_router(state: AppState, swagger: bool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/health", get(health::health_check))
        // Categories
        .route(
            "/api/category",
            get(categories::list_categories)
                .post(categories::create_category)
                .put(categories::update_category),
        )
        .route("/api/category/{id}", delete(categories::delete_category))
        // Restaurants
        .route(
            "/api/restaurant",
            get(restaurants::list_restaurants)
                .post(restaurants::create_restaurant)
                .put(restaurants::update_restaurant),
        )
        .route(
            "/api/restaurant/{id}",
            delete(restaurants::delete_restaurant),
        )
        // Products
        .route(
            "/api/product",
            get(products::list_products)
                .post(products::create_product)
                .put(products::update_product),
        )
        .route("/api/product/{id}", delete(products::delete_product))
        // Users
        .route(
            "/api/user",
            get(users::list_users)
                .post(users::create_user)
                .put(users::update_user),
        )
        .route("/api/user/{id}", delete(users::delete_user))
        .with_state(state);

    if swagger {
        router = router
            .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()));
    }

    router
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use sea_orm_migration::MigratorTrait;
    use serde_json::{json, Value};
    use tower::Service;

    use super::*;
    use crate::config::StatusCodeMode;
    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
    use crate::infrastructure::database::{init_database, DatabaseConfig};
    use crate::interfaces::http::modules::request_id::REQUEST_ID_HEADER;

    async fn app(mode: StatusCodeMode) -> Router {
        let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        let repos = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
        create_api_router(AppState::new(repos, db, mode), false)
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
        let mut svc = app.clone().into_service();
        let resp = svc.call(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn category_lifecycle_over_http() {
        let app = app(StatusCodeMode::Typed).await;

        let (status, body) = send(
            &app,
            json_request("POST", "/api/category", json!({"id": 77, "name": "Desserts"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let created: Value = serde_json::from_slice(&body).unwrap();
        let id = created["id"].as_i64().unwrap();
        assert_ne!(id, 77);
        assert_eq!(created["name"], "Desserts");

        let (status, body) = send(
            &app,
            json_request("PUT", "/api/category", json!({"id": id, "name": "Sweets"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let updated: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(updated["name"], "Sweets");

        let (status, body) = send(&app, empty_request("GET", "/api/category")).await;
        assert_eq!(status, StatusCode::OK);
        let all: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(all, json!([{"id": id, "name": "Sweets"}]));

        let (status, body) =
            send(&app, empty_request("DELETE", &format!("/api/category/{id}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), json!(true));

        let (_, body) = send(&app, empty_request("GET", "/api/category")).await;
        assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), json!([]));
    }

    #[tokio::test]
    async fn product_fields_use_camel_case_and_numeric_price() {
        let app = app(StatusCodeMode::Typed).await;

        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/api/product",
                json!({
                    "restaurantId": 4,
                    "name": "Ceviche",
                    "description": "Lime-cured fish",
                    "price": 12.5,
                    "imageUrl": "https://img.example/ceviche.png"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let created: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(created["restaurantId"], 4);
        assert_eq!(created["imageUrl"], "https://img.example/ceviche.png");
        assert_eq!(created["price"].as_f64(), Some(12.5));
    }

    #[tokio::test]
    async fn restaurant_with_unknown_category_is_created() {
        let app = app(StatusCodeMode::Typed).await;

        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/api/restaurant",
                json!({
                    "name": "Orphan Diner",
                    "phone": "555-0101",
                    "address": "1 Main St",
                    "longitude": -77.25,
                    "latitude": -12.5,
                    "categoryId": 9999
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let created: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(created["categoryId"], 9999);
    }

    #[tokio::test]
    async fn user_password_hash_is_echoed() {
        let app = app(StatusCodeMode::Typed).await;

        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/api/user",
                json!({
                    "name": "Ana",
                    "email": "ana@example.com",
                    "passwordHash": "$2b$12$hash",
                    "address": "Jr. Union 45",
                    "longitude": -77.0,
                    "latitude": -12.0
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let created: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(created["passwordHash"], "$2b$12$hash");
    }

    #[tokio::test]
    async fn unknown_id_is_404_in_typed_mode() {
        let app = app(StatusCodeMode::Typed).await;

        let (status, body) = send(
            &app,
            json_request("PUT", "/api/category", json!({"id": 5, "name": "Ghost"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let err: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(err["success"], false);

        for uri in [
            "/api/category/5",
            "/api/restaurant/5",
            "/api/product/5",
            "/api/user/5",
        ] {
            let (status, _) = send(&app, empty_request("DELETE", uri)).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        }
    }

    #[tokio::test]
    async fn unknown_id_is_bare_500_in_legacy_mode() {
        let app = app(StatusCodeMode::Legacy).await;

        let (status, body) = send(
            &app,
            json_request("PUT", "/api/category", json!({"id": 5, "name": "Ghost"})),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.is_empty());

        let (status, body) = send(&app, empty_request("DELETE", "/api/user/5")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn malformed_body_is_400() {
        let app = app(StatusCodeMode::Legacy).await;

        let req = Request::builder()
            .method("POST")
            .uri("/api/category")
            .header("content-type", "application/json")
            .body(Body::from("{\"name\": "))
            .unwrap();
        let (status, _) = send(&app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_without_positive_id_is_422() {
        let app = app(StatusCodeMode::Typed).await;

        let (status, body) = send(
            &app,
            json_request("PUT", "/api/category", json!({"id": 0, "name": "Zero"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let err: Value = serde_json::from_slice(&body).unwrap();
        assert!(err["error"].as_str().unwrap().contains("id"));
    }

    #[tokio::test]
    async fn request_id_is_echoed_or_generated() {
        let app = app(StatusCodeMode::Typed).await;

        let req = Request::builder()
            .uri("/health")
            .header(REQUEST_ID_HEADER, "abc-123")
            .body(Body::empty())
            .unwrap();
        let mut svc = app.clone().into_service();
        let resp = svc.call(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[REQUEST_ID_HEADER], "abc-123");

        let resp = svc.call(empty_request("GET", "/health")).await.unwrap();
        let generated = resp.headers()[REQUEST_ID_HEADER].to_str().unwrap();
        assert_eq!(generated.len(), 36);
    }

    #[tokio::test]
    async fn health_reports_ok_with_database() {
        let app = app(StatusCodeMode::Typed).await;

        let (status, body) = send(&app, empty_request("GET", "/health")).await;
        assert_eq!(status, StatusCode::OK);
        let health: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(health["status"], "ok");
        assert_eq!(health["database"]["status"], "ok");
    }

    #[test]
    fn openapi_lists_every_resource_path() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/category",
            "/api/category/{id}",
            "/api/restaurant",
            "/api/product",
            "/api/user/{id}",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
