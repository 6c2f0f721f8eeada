//! Route definitions for the `/sales` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::sales;
use crate::state::AppState;

/// Sales routes mounted at `/sales`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(sales::add_sale))
}
