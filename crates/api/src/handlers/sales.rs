//! Handlers for the `/sales` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bookstore_db::models::sale::SaleCreate;
use bookstore_db::repositories::SaleRepo;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /sales/
///
/// Thin pass-through to `pr_add_sale`. Not idempotent: every call records
/// a new sale and decrements stock. Stock or catalog violations raise
/// inside the procedure and surface as query errors.
pub async fn add_sale(
    State(state): State<AppState>,
    Json(payload): Json<SaleCreate>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.acquire().await.map_err(AppError::Connection)?;
    SaleRepo::add(&mut conn, &payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Sale recorded successfully" })),
    ))
}
