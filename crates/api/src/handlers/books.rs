//! Handlers for the `/books` resource: CRUD, schema reflection, and the
//! stored-function catalog queries.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bookstore_core::error::CoreError;
use bookstore_core::types::DbId;
use bookstore_db::models::book::{BookCreate, PriceUpdate};
use bookstore_db::repositories::BookRepo;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

/// GET /books/?skip=0&limit=100
///
/// List books ordered by id as a contiguous offset/limit window. An offset
/// past the end of the table yields an empty list.
pub async fn list_books(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let (skip, limit) = params.resolve()?;
    let mut conn = state.db.acquire().await.map_err(AppError::Connection)?;
    let books = BookRepo::list(&mut conn, skip, limit).await?;
    Ok(Json(books))
}

/// GET /books/{id}
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.acquire().await.map_err(AppError::Connection)?;
    let book = BookRepo::find_by_id(&mut conn, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Book"))?;
    Ok(Json(book))
}

/// POST /books/
///
/// Validates the payload (price > 0, field length caps) before any
/// database work; the price is normalized to two decimals. The id is
/// assigned transactionally as `max + 1`.
pub async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<BookCreate>,
) -> AppResult<impl IntoResponse> {
    let payload = payload.validated()?;
    let mut conn = state.db.acquire().await.map_err(AppError::Connection)?;
    let book = BookRepo::create(&mut conn, &payload).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// PUT /books/{id}
///
/// Overwrites every mutable field with the (validated) payload.
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<BookCreate>,
) -> AppResult<impl IntoResponse> {
    let payload = payload.validated()?;
    let mut conn = state.db.acquire().await.map_err(AppError::Connection)?;
    let book = BookRepo::update(&mut conn, id, &payload)
        .await?
        .ok_or_else(|| CoreError::not_found("Book"))?;
    Ok(Json(book))
}

/// DELETE /books/{id}
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.acquire().await.map_err(AppError::Connection)?;
    let deleted = BookRepo::delete(&mut conn, id).await?;
    if !deleted {
        return Err(CoreError::not_found("Book").into());
    }
    Ok(Json(json!({ "message": "Book deleted successfully" })))
}

/// GET /books/structure
///
/// Column metadata for the `books` table; a schema-reflection passthrough.
pub async fn book_structure(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.acquire().await.map_err(AppError::Connection)?;
    let columns = BookRepo::table_structure(&mut conn).await?;
    Ok(Json(json!({ "table_structure": columns })))
}

/// GET /books/{id}/price
pub async fn book_price(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.acquire().await.map_err(AppError::Connection)?;
    let price = BookRepo::price(&mut conn, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Book"))?;
    Ok(Json(json!({ "book_id": id, "price": price })))
}

/// GET /books/{id}/availability
///
/// Per-shop stock for one book. A book stocked nowhere yields an empty
/// list, which is a valid answer rather than a 404.
pub async fn book_availability(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.acquire().await.map_err(AppError::Connection)?;
    let stock = BookRepo::availability(&mut conn, id).await?;
    Ok(Json(stock))
}

/// GET /books/genre/{genre}
pub async fn books_by_genre(
    State(state): State<AppState>,
    Path(genre): Path<String>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.acquire().await.map_err(AppError::Connection)?;
    let books = BookRepo::by_genre(&mut conn, &genre).await?;
    Ok(Json(books))
}

/// GET /books/genre/{genre}/total-sold
pub async fn total_sold_by_genre(
    State(state): State<AppState>,
    Path(genre): Path<String>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.acquire().await.map_err(AppError::Connection)?;
    let total = BookRepo::total_sold_by_genre(&mut conn, &genre).await?;
    Ok(Json(json!({ "genre": genre, "total_sold": total })))
}

/// GET /books/author/{name}/most-sold
///
/// 404 when the author has no recorded sales.
pub async fn most_sold_by_author(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.acquire().await.map_err(AppError::Connection)?;
    let best_seller = BookRepo::most_sold_by_author(&mut conn, &name)
        .await?
        .ok_or_else(|| CoreError::not_found("Book"))?;
    Ok(Json(best_seller))
}

/// GET /books/total
pub async fn total_books(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.acquire().await.map_err(AppError::Connection)?;
    let total = BookRepo::total(&mut conn).await?;
    Ok(Json(json!({ "total_books": total })))
}

/// PUT /books/{id}/price
///
/// Thin pass-through to `pr_update_book_price`: no pre-validation, and
/// success is inferred from the absence of a driver error.
pub async fn update_book_price(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<PriceUpdate>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.acquire().await.map_err(AppError::Connection)?;
    BookRepo::update_price(&mut conn, id, payload.price).await?;
    Ok(Json(json!({ "message": "Price updated successfully" })))
}
