//! Customer aggregate result shapes.

use bookstore_core::types::Date;
use serde::Serialize;
use sqlx::FromRow;

/// Row returned by `fn_get_purchase_history`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PurchaseRecord {
    pub title: String,
    pub quantity: i32,
    pub sale_date: Date,
    pub shop_name: String,
}
