//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the real router through `tower::ServiceExt::oneshot`, so no
//! TCP listener is involved. Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use bookstore_api::config::ServerConfig;
use bookstore_api::router::build_app_router;
use bookstore_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// The connection string is a placeholder: tests wrap the pool that
/// `#[sqlx::test]` hands them instead of connecting themselves.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "postgres://unused-in-tests".to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Uses the same `build_app_router` as `main.rs`, so integration tests
/// exercise the production middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery).
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        db: bookstore_db::Db::from_pool(pool),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seed helpers
//
// Shops, customers, and salesmen are owned by the external store and have
// no write endpoints, so tests insert them directly.
// ---------------------------------------------------------------------------

pub async fn seed_shop(pool: &PgPool, name: &str) -> i32 {
    sqlx::query_scalar("INSERT INTO shops (name, city) VALUES ($1, 'Springfield') RETURNING shop_id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn seed_customer(pool: &PgPool, first_name: &str, last_name: &str) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO customers (first_name, last_name) VALUES ($1, $2) RETURNING customer_id",
    )
    .bind(first_name)
    .bind(last_name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn seed_salesman(pool: &PgPool, shop_id: i32) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO salesmen (first_name, last_name, shop_id) \
         VALUES ('Sam', 'Seller', $1) RETURNING salesman_id",
    )
    .bind(shop_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn seed_stock(pool: &PgPool, shop_id: i32, book_id: i32, quantity: i32) {
    sqlx::query("INSERT INTO stocks (shop_id, book_id, quantity) VALUES ($1, $2, $3)")
        .bind(shop_id)
        .bind(book_id)
        .bind(quantity)
        .execute(pool)
        .await
        .unwrap();
}

/// Create a book through the API and return its assigned id.
pub async fn seed_book(pool: &PgPool, title: &str, author: &str, genre: &str, price: f64) -> i32 {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/books/",
        serde_json::json!({
            "Title": title,
            "Author": author,
            "Genre": genre,
            "Price": price,
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    let json = body_json(response).await;
    json["BookID"].as_i64().unwrap() as i32
}
