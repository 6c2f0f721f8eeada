//! Route definitions for the `/stock` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::stock;
use crate::state::AppState;

/// Stock routes mounted at `/stock`.
pub fn router() -> Router<AppState> {
    Router::new().route("/{shop_id}", get(stock::shop_stock))
}
