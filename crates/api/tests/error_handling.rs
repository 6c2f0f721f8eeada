//! Tests for `AppError` → HTTP response mapping.
//!
//! These verify that each `AppError` variant produces the documented
//! status code and `{"detail": ...}` body. They call `IntoResponse`
//! directly on `AppError` values; no server or database is needed.

use axum::response::IntoResponse;
use bookstore_api::error::AppError;
use bookstore_core::error::CoreError;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::not_found("Book"));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["detail"], "Book not found");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation maps to 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation(
        "Price must be greater than zero".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["detail"], "Price must be greater than zero");
}

// ---------------------------------------------------------------------------
// Test: connection failures map to 500 with the driver message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn connection_error_returns_500_with_driver_message() {
    let err = AppError::Connection(sqlx::Error::PoolTimedOut);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    let detail = json["detail"].as_str().unwrap();
    assert!(
        detail.starts_with("Database connection error:"),
        "unexpected detail: {detail}"
    );
}

// ---------------------------------------------------------------------------
// Test: query failures map to 500 with the driver message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn query_error_returns_500_with_driver_message() {
    let err = AppError::Query(sqlx::Error::RowNotFound);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    let detail = json["detail"].as_str().unwrap();
    assert!(
        detail.starts_with("Database error:"),
        "unexpected detail: {detail}"
    );
}
