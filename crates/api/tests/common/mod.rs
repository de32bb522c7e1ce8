use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use guestbook_api::config::ServerConfig;
use guestbook_api::router::build_app_router;
use guestbook_api::state::AppState;

/// A syntactically valid connection string pointing at a port nothing
/// listens on. The driver connects lazily, so building a client against it
/// succeeds; every operation then fails after the selection timeout.
pub const UNREACHABLE_MONGO_URL: &str = "mongodb://127.0.0.1:1";

/// Build a test `ServerConfig` with safe defaults and an unreachable
/// datastore endpoint.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        mongo_url: UNREACHABLE_MONGO_URL.to_string(),
        mongo_db: "number".to_string(),
        mongo_collection: "login".to_string(),
        request_timeout_secs: 30,
        mongo_timeout_secs: 1,
    }
}

/// Build the full application router with all middleware layers, backed by
/// a client pointed at an unreachable endpoint with a short selection
/// timeout, so datastore-failure paths answer quickly.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub async fn build_test_app() -> Router {
    let config = test_config();
    let client = guestbook_db::create_client(&config.mongo_url, Duration::from_millis(250))
        .await
        .expect("unreachable test URL should still parse");

    build_app_router(AppState::new(client, config.clone()), &config)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, path: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// POST a raw body with a JSON content type against the app.
pub async fn post_json(app: Router, path: &str, body: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as text.
pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
