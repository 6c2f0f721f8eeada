//! Repository for customer-facing stored functions.

use bookstore_core::types::DbId;
use sqlx::PgConnection;

use crate::models::customer::PurchaseRecord;

/// Aggregate access for customers; customers themselves are managed
/// outside this service.
pub struct CustomerRepo;

impl CustomerRepo {
    /// `fn_get_customer_full_name`: NULL (absent customer) maps to `None`.
    pub async fn full_name(
        conn: &mut PgConnection,
        customer_id: DbId,
    ) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<String>>("SELECT fn_get_customer_full_name($1)")
            .bind(customer_id)
            .fetch_one(conn)
            .await
    }

    /// `fn_total_purchases_by_customer`: copies bought across all sales.
    pub async fn total_purchases(
        conn: &mut PgConnection,
        customer_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT fn_total_purchases_by_customer($1)")
            .bind(customer_id)
            .fetch_one(conn)
            .await
    }

    /// `fn_get_purchase_history`: most recent purchases first.
    pub async fn purchase_history(
        conn: &mut PgConnection,
        customer_id: DbId,
    ) -> Result<Vec<PurchaseRecord>, sqlx::Error> {
        sqlx::query_as::<_, PurchaseRecord>(
            "SELECT title, quantity, sale_date, shop_name FROM fn_get_purchase_history($1)",
        )
        .bind(customer_id)
        .fetch_all(conn)
        .await
    }
}
