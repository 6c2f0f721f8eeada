//! Route definitions for the `/shops` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::shops;
use crate::state::AppState;

/// Shop routes mounted at `/shops`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/least-sold-books", get(shops::least_sold_books))
        .route("/{id}/total-sales", get(shops::total_sales))
        .route("/{id}/total-sales/dates", get(shops::total_sales_in_range))
}
