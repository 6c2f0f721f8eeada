//! Repository for the `books` table and its stored-function catalog.

use bookstore_core::types::DbId;
use sqlx::{Connection, PgConnection};

use crate::models::book::{Book, BookColumn, BookCreate};
use crate::models::sale::MostSoldBook;
use crate::models::stock::ShopAvailability;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "book_id, title, author, genre, price, published_date";

/// Provides CRUD and stored-function access for books.
pub struct BookRepo;

impl BookRepo {
    /// List books ordered by id as a contiguous offset/limit window.
    pub async fn list(
        conn: &mut PgConnection,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books ORDER BY book_id OFFSET $1 LIMIT $2");
        sqlx::query_as::<_, Book>(&query)
            .bind(skip)
            .bind(limit)
            .fetch_all(conn)
            .await
    }

    /// Find a book by its id.
    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books WHERE book_id = $1");
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Insert a new book with an id of `max(book_id) + 1`.
    ///
    /// The id read and the insert run in one transaction holding an
    /// exclusive lock on `books`, so concurrent creates serialize instead
    /// of computing the same candidate id.
    pub async fn create(conn: &mut PgConnection, input: &BookCreate) -> Result<Book, sqlx::Error> {
        let mut tx = conn.begin().await?;

        sqlx::query("LOCK TABLE books IN EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await?;

        let next_id: DbId = sqlx::query_scalar("SELECT COALESCE(MAX(book_id), 0) + 1 FROM books")
            .fetch_one(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO books (book_id, title, author, genre, price, published_date) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        let book = sqlx::query_as::<_, Book>(&query)
            .bind(next_id)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.genre)
            .bind(input.price)
            .bind(input.published_date)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(book)
    }

    /// Overwrite every mutable field of a book.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &BookCreate,
    ) -> Result<Option<Book>, sqlx::Error> {
        let query = format!(
            "UPDATE books \
             SET title = $2, author = $3, genre = $4, price = $5, published_date = $6 \
             WHERE book_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.genre)
            .bind(input.price)
            .bind(input.published_date)
            .fetch_optional(conn)
            .await
    }

    /// Delete a book. Returns `false` if no row was removed.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM books WHERE book_id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Column metadata for the `books` table, from `information_schema`.
    pub async fn table_structure(conn: &mut PgConnection) -> Result<Vec<BookColumn>, sqlx::Error> {
        sqlx::query_as::<_, BookColumn>(
            "SELECT column_name::text AS column_name, \
                    data_type::text AS data_type, \
                    character_maximum_length::int AS max_length, \
                    is_nullable::text AS nullable \
             FROM information_schema.columns \
             WHERE table_name = 'books' \
             ORDER BY ordinal_position",
        )
        .fetch_all(conn)
        .await
    }

    /// `fn_get_book_price`: NULL (absent book) maps to `None`.
    pub async fn price(conn: &mut PgConnection, id: DbId) -> Result<Option<f64>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<f64>>("SELECT fn_get_book_price($1)")
            .bind(id)
            .fetch_one(conn)
            .await
    }

    /// `fn_get_available_stock`: per-shop quantities for one book.
    pub async fn availability(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Vec<ShopAvailability>, sqlx::Error> {
        sqlx::query_as::<_, ShopAvailability>(
            "SELECT shop_id, shop_name, quantity FROM fn_get_available_stock($1)",
        )
        .bind(id)
        .fetch_all(conn)
        .await
    }

    /// `fn_get_books_by_genre`: full book rows for one genre.
    pub async fn by_genre(conn: &mut PgConnection, genre: &str) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fn_get_books_by_genre($1)");
        sqlx::query_as::<_, Book>(&query)
            .bind(genre)
            .fetch_all(conn)
            .await
    }

    /// `fn_total_books`: catalog row count.
    pub async fn total(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT fn_total_books()")
            .fetch_one(conn)
            .await
    }

    /// `fn_total_books_sold_by_genre`: copies sold across a genre.
    pub async fn total_sold_by_genre(
        conn: &mut PgConnection,
        genre: &str,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT fn_total_books_sold_by_genre($1)")
            .bind(genre)
            .fetch_one(conn)
            .await
    }

    /// `fn_most_sold_book_by_author`: best seller for one author, if any
    /// sales exist.
    pub async fn most_sold_by_author(
        conn: &mut PgConnection,
        author: &str,
    ) -> Result<Option<MostSoldBook>, sqlx::Error> {
        sqlx::query_as::<_, MostSoldBook>(
            "SELECT title, copies_sold FROM fn_most_sold_book_by_author($1)",
        )
        .bind(author)
        .fetch_optional(conn)
        .await
    }

    /// `pr_update_book_price`: overwrite a book's price.
    ///
    /// The procedure reports nothing back; success is the absence of a
    /// driver error.
    pub async fn update_price(
        conn: &mut PgConnection,
        id: DbId,
        price: f64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("CALL pr_update_book_price($1, $2)")
            .bind(id)
            .bind(price)
            .execute(conn)
            .await?;
        Ok(())
    }
}
