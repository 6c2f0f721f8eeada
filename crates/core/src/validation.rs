//! Shared payload validation helpers.
//!
//! Reusable field checks returning `CoreError::Validation` with a message
//! naming the offending field.

use crate::error::CoreError;

/// Validate that a required string is non-empty and at most `max` chars.
pub fn validate_required_length(value: &str, max: usize, name: &str) -> Result<(), CoreError> {
    if value.is_empty() {
        return Err(CoreError::Validation(format!("{name} must not be empty")));
    }
    validate_max_length(value, max, name)
}

/// Validate that a string is at most `max` chars.
pub fn validate_max_length(value: &str, max: usize, name: &str) -> Result<(), CoreError> {
    if value.chars().count() > max {
        return Err(CoreError::Validation(format!(
            "{name} must be at most {max} characters"
        )));
    }
    Ok(())
}

/// Validate that a price is strictly positive.
///
/// Written as a negated comparison so NaN is rejected too.
pub fn validate_positive_price(price: f64) -> Result<(), CoreError> {
    if !(price > 0.0) {
        return Err(CoreError::Validation(
            "Price must be greater than zero".into(),
        ));
    }
    Ok(())
}
