/// Domain-level error type shared across crates.
///
/// Handlers translate these into HTTP responses; repositories return them
/// where the outcome is a domain fact (a missing row) rather than a driver
/// failure.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("{0}")]
    Validation(String),
}

impl CoreError {
    /// Shorthand for the common keyed-lookup miss.
    pub fn not_found(entity: &'static str) -> Self {
        CoreError::NotFound { entity }
    }
}
