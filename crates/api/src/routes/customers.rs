//! Route definitions for the `/customers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::customers;
use crate::state::AppState;

/// Customer routes mounted at `/customers`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/full-name", get(customers::full_name))
        .route("/{id}/total-purchases", get(customers::total_purchases))
        .route("/{id}/purchase-history", get(customers::purchase_history))
}
