use barber_core::store::{LookupError, Table};
use thiserror::Error;

/// Errors surfaced by role resolution.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessError {
    /// A lookup failed. Resolution stops at the failing step.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// A matching row could not be turned into a role assignment.
    #[error("inconsistent {table} record: {reason}")]
    InconsistentRecord { table: Table, reason: String },
}
