//! Sales DTOs and aggregate result shapes.

use bookstore_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Payload for `POST /sales/`, bound positionally onto `pr_add_sale`.
///
/// No field-level validation beyond type coercion; the stored procedure
/// raises on unknown books or insufficient stock.
#[derive(Debug, Clone, Deserialize)]
pub struct SaleCreate {
    pub customer_id: DbId,
    pub salesman_id: DbId,
    pub book_id: DbId,
    pub shop_id: DbId,
    pub quantity: i32,
    #[serde(default)]
    pub sale_date: Option<Date>,
}

/// Row returned by `fn_most_sold_book_by_author`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MostSoldBook {
    pub title: String,
    pub copies_sold: i64,
}

/// Row returned by `fn_least_sold_book_per_shop`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LeastSoldBook {
    pub shop_id: DbId,
    pub shop_name: String,
    pub title: String,
    pub copies_sold: i64,
}
