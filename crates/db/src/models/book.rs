//! Book entity model and DTOs.

use bookstore_core::error::CoreError;
use bookstore_core::types::{Date, DbId};
use bookstore_core::validation::{
    validate_max_length, validate_positive_price, validate_required_length,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `books` table.
///
/// JSON field names are PascalCase (including the `BookID` casing);
/// existing clients depend on them.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "BookID")]
    pub book_id: DbId,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Author")]
    pub author: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "PublishedDate")]
    pub published_date: Option<Date>,
}

/// Creation/update payload: a [`Book`] minus the store-assigned `BookID`.
#[derive(Debug, Clone, Deserialize)]
pub struct BookCreate {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Author", default)]
    pub author: Option<String>,
    #[serde(rename = "Genre", default)]
    pub genre: Option<String>,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "PublishedDate", default)]
    pub published_date: Option<Date>,
}

impl BookCreate {
    /// Validate the payload and normalize the price to two decimal places.
    ///
    /// Runs before any database work, so an invalid payload never reaches
    /// the store. Field caps match the column widths.
    pub fn validated(mut self) -> Result<Self, CoreError> {
        validate_required_length(&self.title, 255, "Title")?;
        if let Some(author) = &self.author {
            validate_max_length(author, 255, "Author")?;
        }
        if let Some(genre) = &self.genre {
            validate_max_length(genre, 100, "Genre")?;
        }
        validate_positive_price(self.price)?;
        self.price = round_price(self.price);
        Ok(self)
    }
}

/// Body for `PUT /books/{id}/price`, forwarded to `pr_update_book_price`.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceUpdate {
    pub price: f64,
}

/// One row of `information_schema.columns` metadata for the `books` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BookColumn {
    pub column_name: String,
    pub data_type: String,
    pub max_length: Option<i32>,
    pub nullable: String,
}

/// Round to two decimal places, half away from zero.
pub fn round_price(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}
