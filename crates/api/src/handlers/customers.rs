//! Handlers for customer aggregates.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use bookstore_core::error::CoreError;
use bookstore_core::types::DbId;
use bookstore_db::repositories::CustomerRepo;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /customers/{id}/full-name
///
/// 404 when the customer does not exist.
pub async fn full_name(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.acquire().await.map_err(AppError::Connection)?;
    let name = CustomerRepo::full_name(&mut conn, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Customer"))?;
    Ok(Json(json!({ "customer_id": id, "full_name": name })))
}

/// GET /customers/{id}/total-purchases
///
/// Copies bought across all recorded sales; zero for a customer with no
/// purchases.
pub async fn total_purchases(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.acquire().await.map_err(AppError::Connection)?;
    let total = CustomerRepo::total_purchases(&mut conn, id).await?;
    Ok(Json(json!({ "customer_id": id, "total_purchases": total })))
}

/// GET /customers/{id}/purchase-history
pub async fn purchase_history(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.acquire().await.map_err(AppError::Connection)?;
    let history = CustomerRepo::purchase_history(&mut conn, id).await?;
    Ok(Json(history))
}
