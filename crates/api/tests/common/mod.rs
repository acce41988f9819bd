#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use catalog_api::app::build_app;
use catalog_api::auth::jwt::{generate_access_token, JwtConfig};
use catalog_api::config::ServerConfig;
use catalog_api::state::AppState;
use catalog_db::MemoryCatalogStore;

/// Key shared by the test config and [`token`].
pub const TEST_JWT_KEY: &str = "integration-test-key-with-enough-entropy";

/// Build a test `JwtConfig` matching the production defaults.
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        key: TEST_JWT_KEY.to_string(),
        issuer: "catalog-api".to_string(),
        audience: "catalog-client".to_string(),
        expiry_mins: 15,
    }
}

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as the only CORS origin and a 30-second
/// request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        author: "Equipe Catalogo".to_string(),
        jwt: test_jwt_config(),
    }
}

/// Build the full application router over an empty in-memory store.
///
/// Goes through [`build_app`] so tests exercise the production middleware
/// stack (CORS, request ID, timeout, tracing, panic recovery).
pub fn build_test_app() -> Router {
    build_app(AppState::new(Arc::new(MemoryCatalogStore::new()), test_config()))
}

/// A valid bearer token for the test config.
pub fn token() -> String {
    generate_access_token("tester@example.com", &test_jwt_config()).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn request(method: Method, uri: &str, auth: Option<&str>, body: Option<serde_json::Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = auth {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// GET without credentials.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, request(Method::GET, uri, None, None)).await
}

/// GET with a valid bearer token.
pub async fn get_auth(app: Router, uri: &str) -> Response<Body> {
    send(app, request(Method::GET, uri, Some(&token()), None)).await
}

/// POST a JSON body without credentials.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, request(Method::POST, uri, None, Some(body))).await
}

/// POST a JSON body with a valid bearer token.
pub async fn post_json_auth(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, request(Method::POST, uri, Some(&token()), Some(body))).await
}

/// PUT a JSON body with a valid bearer token.
pub async fn put_json_auth(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, request(Method::PUT, uri, Some(&token()), Some(body))).await
}

/// DELETE with a valid bearer token.
pub async fn delete_auth(app: Router, uri: &str) -> Response<Body> {
    send(app, request(Method::DELETE, uri, Some(&token()), None)).await
}

/// Send a raw request through the app.
pub async fn send_request(app: Router, request: Request<Body>) -> Response<Body> {
    send(app, request).await
}

/// Collect a response body as UTF-8 text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a category through the API and return its id.
pub async fn create_category(app: Router, name: &str) -> i64 {
    let body = serde_json::json!({ "nome": name, "imagemUrl": format!("{name}.jpg") });
    let response = post_json_auth(app, "/api/categorias", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["categoriaId"].as_i64().unwrap()
}

/// Create a product through the API and return its id.
pub async fn create_product(app: Router, name: &str, price: f64, category_id: i64) -> i64 {
    let body = serde_json::json!({
        "nome": name,
        "descricao": format!("{name} description"),
        "preco": price,
        "imagemUrl": format!("{name}.jpg"),
        "estoque": 10,
        "categoriaId": category_id,
    });
    let response = post_json_auth(app, "/api/produtos", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["produtoId"].as_i64().unwrap()
}
