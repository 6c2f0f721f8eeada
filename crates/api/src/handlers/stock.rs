//! Handler for the `/stock` resource.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use bookstore_core::types::DbId;
use bookstore_db::repositories::StockRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /stock/{shop_id}
///
/// Every stocked title in one shop, as `{title, quantity, book_id}`
/// entries. An unknown shop yields an empty list.
pub async fn shop_stock(
    State(state): State<AppState>,
    Path(shop_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.acquire().await.map_err(AppError::Connection)?;
    let stock = StockRepo::shop_stock(&mut conn, shop_id).await?;
    Ok(Json(stock))
}
