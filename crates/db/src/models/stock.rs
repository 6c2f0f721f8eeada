//! Stock listing shapes.

use bookstore_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// One line of a shop's stock listing, projected from the
/// `stocks JOIN books` query.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StockItem {
    pub title: String,
    pub quantity: i32,
    pub book_id: DbId,
}

/// Per-shop availability row returned by `fn_get_available_stock`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShopAvailability {
    pub shop_id: DbId,
    pub shop_name: String,
    pub quantity: i32,
}
