use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bookstore_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and distinguishes the two driver
/// failure modes: failing to obtain a connection versus failing to execute
/// a statement.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error (validation failure or missing entity).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Failure to obtain a database connection.
    #[error("Database connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// Failure executing a statement or stored routine.
    #[error("Database error: {0}")]
    Query(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    /// Produce the `{"detail": <message>}` error body.
    ///
    /// Validation maps to 400, missing entities to 404, and both driver
    /// failure modes to 500. 500 bodies carry the underlying driver
    /// message; this service is deployed as an internal tool.
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Core(CoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Core(CoreError::Validation(_)) => StatusCode::BAD_REQUEST,
            AppError::Connection(err) => {
                tracing::error!(error = %err, "Failed to acquire database connection");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Query(err) => {
                tracing::error!(error = %err, "Database statement failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = json!({ "detail": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
