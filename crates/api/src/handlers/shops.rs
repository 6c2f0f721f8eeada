//! Handlers for shop-level sales aggregates.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use bookstore_core::types::DbId;
use bookstore_db::repositories::{SaleRepo, ShopRepo};
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::query::DateRangeParams;
use crate::state::AppState;

/// GET /shops/{id}/total-sales
pub async fn total_sales(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.acquire().await.map_err(AppError::Connection)?;
    let total = ShopRepo::total_sales(&mut conn, id).await?;
    Ok(Json(json!({ "shop_id": id, "total_sales": total })))
}

/// GET /shops/{id}/total-sales/dates?start_date=...&end_date=...
///
/// The date strings are forwarded unparsed; the store casts them and a
/// malformed date surfaces as a query error.
pub async fn total_sales_in_range(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(range): Query<DateRangeParams>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.acquire().await.map_err(AppError::Connection)?;
    let total =
        ShopRepo::total_sales_in_range(&mut conn, id, &range.start_date, &range.end_date).await?;
    Ok(Json(json!({
        "shop_id": id,
        "start_date": range.start_date,
        "end_date": range.end_date,
        "total_sales": total,
    })))
}

/// GET /shops/least-sold-books
///
/// The slowest-moving title in every shop that has recorded sales.
pub async fn least_sold_books(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.acquire().await.map_err(AppError::Connection)?;
    let rows = SaleRepo::least_sold_per_shop(&mut conn).await?;
    Ok(Json(rows))
}
