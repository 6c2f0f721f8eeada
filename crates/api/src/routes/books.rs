//! Route definitions for the `/books` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::books;
use crate::state::AppState;

/// Book routes mounted at `/books`.
///
/// Static segments (`structure`, `total`, `genre`, `author`) are distinct
/// from the `{id}` capture, so registration order does not matter.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(books::list_books).post(books::create_book))
        .route("/structure", get(books::book_structure))
        .route("/total", get(books::total_books))
        .route("/genre/{genre}", get(books::books_by_genre))
        .route("/genre/{genre}/total-sold", get(books::total_sold_by_genre))
        .route("/author/{name}/most-sold", get(books::most_sold_by_author))
        .route(
            "/{id}",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .route(
            "/{id}/price",
            get(books::book_price).put(books::update_book_price),
        )
        .route("/{id}/availability", get(books::book_availability))
}
