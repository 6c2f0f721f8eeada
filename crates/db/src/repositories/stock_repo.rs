//! Repository for the `stocks` table.

use bookstore_core::types::DbId;
use sqlx::PgConnection;

use crate::models::stock::StockItem;

/// Read access to shop stock levels.
pub struct StockRepo;

impl StockRepo {
    /// All stocked titles for one shop, joined against the catalog.
    pub async fn shop_stock(
        conn: &mut PgConnection,
        shop_id: DbId,
    ) -> Result<Vec<StockItem>, sqlx::Error> {
        sqlx::query_as::<_, StockItem>(
            "SELECT b.title, s.quantity, b.book_id \
             FROM stocks s \
             JOIN books b ON s.book_id = b.book_id \
             WHERE s.shop_id = $1",
        )
        .bind(shop_id)
        .fetch_all(conn)
        .await
    }
}
