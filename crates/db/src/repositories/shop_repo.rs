//! Repository for shop-level sales aggregates.

use bookstore_core::types::DbId;
use sqlx::PgConnection;

/// Aggregate access for shops. The service never constructs shop entities;
/// shops are referenced only by id.
pub struct ShopRepo;

impl ShopRepo {
    /// `fn_total_sales_by_shop`: lifetime revenue for one shop.
    pub async fn total_sales(conn: &mut PgConnection, shop_id: DbId) -> Result<f64, sqlx::Error> {
        sqlx::query_scalar::<_, f64>("SELECT fn_total_sales_by_shop($1)")
            .bind(shop_id)
            .fetch_one(conn)
            .await
    }

    /// `fn_total_sales_by_shop_in_range`: revenue between two dates.
    ///
    /// The date strings are forwarded unparsed; the store casts them and
    /// raises on malformed input.
    pub async fn total_sales_in_range(
        conn: &mut PgConnection,
        shop_id: DbId,
        start_date: &str,
        end_date: &str,
    ) -> Result<f64, sqlx::Error> {
        sqlx::query_scalar::<_, f64>("SELECT fn_total_sales_by_shop_in_range($1, $2, $3)")
            .bind(shop_id)
            .bind(start_date)
            .bind(end_date)
            .fetch_one(conn)
            .await
    }
}
