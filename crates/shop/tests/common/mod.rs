//! Shared helpers for the integration tests.
//!
//! The tests drive the full router (session layer included) in-process with
//! `tower::ServiceExt::oneshot`, against a fresh in-memory SQLite database.
//! The session cookie is carried between requests by hand.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use secrecy::SecretString;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use juniper_threads_core::Price;
use juniper_threads_shop::config::{AdminCredentials, ShopConfig};
use juniper_threads_shop::db::{MIGRATOR, ProductRepository};
use juniper_threads_shop::models::NewProduct;
use juniper_threads_shop::state::AppState;

/// Build the full application against a fresh in-memory database.
///
/// A single connection keeps every request on the same in-memory SQLite
/// instance.
pub async fn test_app() -> (Router, SqlitePool) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect to in-memory sqlite");
    MIGRATOR.run(&pool).await.expect("run migrations");

    let state = AppState::new(test_config(), pool.clone());
    let app = juniper_threads_shop::app(state)
        .await
        .expect("build application");

    (app, pool)
}

pub fn test_config() -> ShopConfig {
    ShopConfig {
        database_url: SecretString::from("sqlite::memory:"),
        host: "127.0.0.1".parse().expect("parse host"),
        port: 5000,
        base_url: "http://localhost:5000".to_string(),
        admin: AdminCredentials {
            username: "admin".to_string(),
            password: SecretString::from("1234"),
        },
    }
}

/// Insert a product directly and return its raw id.
pub async fn insert_product(pool: &SqlitePool, name: &str, cents: i64) -> i64 {
    let repo = ProductRepository::new(pool);
    let product = repo
        .create(&NewProduct {
            name: name.to_string(),
            price: Price::from_cents(cents),
            image_url: None,
            description: None,
        })
        .await
        .expect("insert product");
    product.id.as_i64()
}

/// Send a request through the app.
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.expect("send request")
}

/// Build a GET request, optionally with a session cookie.
pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).expect("build request")
}

/// Build a form-encoded POST request, optionally with a session cookie.
pub fn form_post(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("build request")
}

/// Build a JSON POST request, optionally with a session cookie.
pub fn json_post(uri: &str, body: serde_json::Value, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("build request")
}

/// Extract the session cookie pair from a response, if one was set.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(ToString::to_string)
}

/// The Location header of a redirect response.
pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .expect("location header")
}

/// Read the full response body as a string.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// Read the full response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let text = body_string(response).await;
    serde_json::from_str(&text).expect("json body")
}
