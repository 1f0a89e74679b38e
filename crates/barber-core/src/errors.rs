//! Cross-cutting error types.
//!
//! Backend-specific errors (`DatabaseError`, `RestError`) live in their own
//! crates and convert into [`crate::store::LookupError`] at the `DataStore`
//! seam. Resolution errors (`AccessError`) live in `barber-access`.

use thiserror::Error;

/// Errors from parsing and validating core domain values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A stored value could not be interpreted.
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
