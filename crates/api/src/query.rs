//! Shared query parameter types for API handlers.

use bookstore_core::error::CoreError;
use serde::Deserialize;

/// Pagination parameters for `GET /books/` (`?skip=&limit=`).
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl PaginationParams {
    /// Apply defaults (skip 0, limit 100) and reject out-of-range values.
    pub fn resolve(&self) -> Result<(i64, i64), CoreError> {
        let skip = self.skip.unwrap_or(0);
        let limit = self.limit.unwrap_or(100);
        if skip < 0 {
            return Err(CoreError::Validation("skip must be non-negative".into()));
        }
        if limit <= 0 {
            return Err(CoreError::Validation("limit must be positive".into()));
        }
        Ok((skip, limit))
    }
}

/// Date-range parameters, forwarded to the store as unparsed strings.
#[derive(Debug, Deserialize)]
pub struct DateRangeParams {
    pub start_date: String,
    pub end_date: String,
}
