//! Companion users REST API. Serves a seeded, read-only list so the client can
//! be exercised end-to-end.

pub mod handlers;

use crate::features::users::User;
use anyhow::{Context, Result};
use axum::{
    http::HeaderValue,
    response::Json,
    routing::get,
    Extension, Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::root::root,
        handlers::health::health,
        handlers::users::list_users,
        handlers::users::get_user,
    ),
    components(schemas(User, handlers::ErrorResponse, handlers::health::Health)),
    tags(
        (name = "users", description = "Users directory"),
        (name = "health", description = "Service status"),
    )
)]
pub struct ApiDoc;

/// Builds the API router over `users`, allowing browser calls from `cors_origin`.
///
/// # Errors
/// Returns an error if `cors_origin` is not a valid header value.
pub fn router(users: Vec<User>, cors_origin: &str) -> Result<Router> {
    let origin = HeaderValue::from_str(cors_origin.trim())
        .with_context(|| format!("invalid CORS origin: {cors_origin}"))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let app = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/users", get(handlers::list_users))
        .route("/users/:id", get(handlers::get_user))
        .route("/openapi.json", get(openapi_json))
        .layer(Extension(Arc::new(users)))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Serves the seeded users on `port` until the process is stopped.
///
/// # Errors
/// Returns an error if the router cannot be built or the port cannot be bound.
pub async fn new(port: u16, cors_origin: &str) -> Result<()> {
    let app = router(handlers::users::seed_users(), cors_origin)?;

    let listener = TcpListener::bind(format!("::0:{port}"))
        .await
        .with_context(|| format!("failed to bind port {port}"))?;

    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::{handlers::users::seed_users, router, DEFAULT_CORS_ORIGIN};
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        router(seed_users(), DEFAULT_CORS_ORIGIN).unwrap()
    }

    async fn get(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn root_returns_banner() {
        let (status, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Users API");
    }

    #[tokio::test]
    async fn users_returns_seed_in_order() {
        let (status, body) = get("/users").await;
        assert_eq!(status, StatusCode::OK);

        let users = body.as_array().unwrap();
        assert_eq!(users.len(), 4);
        let ids: Vec<i64> = users.iter().map(|u| u["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(users[0]["name"], "Vicent");
        assert_eq!(users[1]["surname"], "García");
    }

    #[tokio::test]
    async fn user_by_id_found() {
        let (status, body) = get("/users/2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["email"], "maria.garcia@example.com");
    }

    #[tokio::test]
    async fn user_by_id_missing_is_404() {
        let (status, body) = get("/users/99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "User not found");
    }

    #[tokio::test]
    async fn user_by_non_numeric_id_is_rejected() {
        let response = app()
            .oneshot(Request::get("/users/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn health_sets_app_header() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let header = response
            .headers()
            .get("X-App")
            .and_then(|value| value.to_str().ok())
            .unwrap()
            .to_string();
        assert!(header.starts_with(&format!("userdeck:{}:", env!("CARGO_PKG_VERSION"))));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["name"], "userdeck");
    }

    #[tokio::test]
    async fn openapi_documents_user_routes() {
        let (status, body) = get("/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/users"].is_object());
        assert!(body["paths"]["/users/{id}"].is_object());
    }

    #[tokio::test]
    async fn cors_preflight_allows_frontend_origin() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/users")
            .header("Origin", DEFAULT_CORS_ORIGIN)
            .header("Access-Control-Request-Method", "GET")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        let headers = response.headers();

        assert_eq!(
            headers.get("access-control-allow-origin").unwrap(),
            DEFAULT_CORS_ORIGIN
        );
        assert_eq!(
            headers.get("access-control-allow-credentials").unwrap(),
            "true"
        );
    }

    #[test]
    fn router_rejects_invalid_origin() {
        assert!(router(seed_users(), "http://bad\norigin").is_err());
    }
}
