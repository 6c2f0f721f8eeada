//! Route definitions, one module per resource.
//!
//! Routes mount at the root (no version prefix):
//!
//! ```text
//! /health                                    service + database health
//!
//! /books/                                    list, create
//! /books/structure                           schema reflection
//! /books/total                               catalog count
//! /books/genre/{genre}                       genre listing
//! /books/genre/{genre}/total-sold            copies sold per genre
//! /books/author/{name}/most-sold             author best seller
//! /books/{id}                                get, update, delete
//! /books/{id}/price                          derived price (GET), procedure update (PUT)
//! /books/{id}/availability                   per-shop stock
//!
//! /stock/{shop_id}                           shop stock listing
//!
//! /sales/                                    record a sale
//!
//! /shops/least-sold-books                    slowest mover per shop
//! /shops/{id}/total-sales                    lifetime revenue
//! /shops/{id}/total-sales/dates              revenue in a date range
//!
//! /customers/{id}/full-name                  display name
//! /customers/{id}/total-purchases            copies bought
//! /customers/{id}/purchase-history           purchase listing
//! ```

pub mod books;
pub mod customers;
pub mod health;
pub mod sales;
pub mod shops;
pub mod stock;

use axum::Router;

use crate::state::AppState;

/// Assemble the resource route tree (everything except `/health`).
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/books", books::router())
        .nest("/stock", stock::router())
        .nest("/sales", sales::router())
        .nest("/shops", shops::router())
        .nest("/customers", customers::router())
}
