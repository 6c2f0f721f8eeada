//! Repository for sales: the `pr_add_sale` procedure and sales aggregates.

use sqlx::PgConnection;

use crate::models::sale::{LeastSoldBook, SaleCreate};

/// Write and aggregate access to the `sales` table via stored routines.
pub struct SaleRepo;

impl SaleRepo {
    /// `pr_add_sale`: record a sale and decrement the shop's stock.
    ///
    /// The procedure raises on an unknown book or insufficient stock; no
    /// rows-affected check is performed here.
    pub async fn add(conn: &mut PgConnection, input: &SaleCreate) -> Result<(), sqlx::Error> {
        sqlx::query("CALL pr_add_sale($1, $2, $3, $4, $5, $6)")
            .bind(input.customer_id)
            .bind(input.salesman_id)
            .bind(input.book_id)
            .bind(input.shop_id)
            .bind(input.quantity)
            .bind(input.sale_date)
            .execute(conn)
            .await?;
        Ok(())
    }

    /// `fn_least_sold_book_per_shop`: slowest mover in every shop with sales.
    pub async fn least_sold_per_shop(
        conn: &mut PgConnection,
    ) -> Result<Vec<LeastSoldBook>, sqlx::Error> {
        sqlx::query_as::<_, LeastSoldBook>(
            "SELECT shop_id, shop_name, title, copies_sold FROM fn_least_sold_book_per_shop()",
        )
        .fetch_all(conn)
        .await
    }
}
