//! Data-store contract consumed by the resolvers.
//!
//! A backend exposes two asynchronous reads: an equality-filtered table query
//! and a named-privilege authorization check. Both fail with [`LookupError`]
//! on transport or permission problems; an empty result is `Ok(vec![])`.

use std::fmt;
use std::future::Future;

use serde_json::Value;
use thiserror::Error;

/// One result row, keyed by column name.
pub type Row = serde_json::Map<String, Value>;

/// Tables the resolvers read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Organizations,
    StaffMembers,
    UserRoles,
}

impl Table {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Organizations => "organizations",
            Self::StaffMembers => "staff_members",
            Self::UserRoles => "user_roles",
        }
    }

    /// Columns a filter may reference on this table.
    #[must_use]
    pub const fn filterable_columns(self) -> &'static [&'static str] {
        match self {
            Self::Organizations => &["id", "owner_id", "active"],
            Self::StaffMembers => &["id", "organization_id", "user_id", "active"],
            Self::UserRoles => &["id", "user_id", "role", "organization_id"],
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conjunction of `column = value` conditions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<(&'static str, Value)>,
}

impl Filter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            conditions: Vec::new(),
        }
    }

    #[must_use]
    pub fn eq(mut self, column: &'static str, value: impl Into<Value>) -> Self {
        self.conditions.push((column, value.into()));
        self
    }

    #[must_use]
    pub fn conditions(&self) -> &[(&'static str, Value)] {
        &self.conditions
    }

    /// Check every referenced column against the table's whitelist.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::InvalidQuery` naming the first unknown column.
    pub fn validate_for(&self, table: Table) -> Result<(), LookupError> {
        let allowed = table.filterable_columns();
        match self.conditions.iter().find(|(col, _)| !allowed.contains(col)) {
            Some((col, _)) => Err(LookupError::InvalidQuery(format!(
                "column '{col}' is not filterable on {table}"
            ))),
            None => Ok(()),
        }
    }
}

/// Failure of a data-store read.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    /// Network, connection, or backend-side failure.
    #[error("lookup transport failure: {0}")]
    Transport(String),

    /// The backend refused the read (auth or row-level policy).
    #[error("lookup denied: {0}")]
    Permission(String),

    /// The backend answered with data that could not be decoded.
    #[error("lookup decode failure: {0}")]
    Decode(String),

    /// The query itself was malformed (unknown column, bad limit).
    #[error("invalid lookup: {0}")]
    InvalidQuery(String),
}

/// Read interface over the hosted (or local) backend.
pub trait DataStore {
    /// Return at most `limit` rows of `table` matching every condition in `filter`.
    fn query(
        &self,
        table: Table,
        filter: &Filter,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Row>, LookupError>> + Send;

    /// Ask the backend whether `subject_id` holds `privilege`.
    ///
    /// The raw JSON answer is returned; callers decide what counts as granted.
    fn authorization_check(
        &self,
        subject_id: &str,
        privilege: &str,
    ) -> impl Future<Output = Result<Value, LookupError>> + Send;
}

impl<S: DataStore + Sync> DataStore for &S {
    fn query(
        &self,
        table: Table,
        filter: &Filter,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Row>, LookupError>> + Send {
        (**self).query(table, filter, limit)
    }

    fn authorization_check(
        &self,
        subject_id: &str,
        privilege: &str,
    ) -> impl Future<Output = Result<Value, LookupError>> + Send {
        (**self).authorization_check(subject_id, privilege)
    }
}

/// Hook fired by mutations that change a subject's role-determining rows.
pub trait RoleInvalidator: Send + Sync {
    fn invalidate(&self, subject_id: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_collects_conditions_in_order() {
        let filter = Filter::new().eq("user_id", "u1").eq("active", true);
        assert_eq!(
            filter.conditions(),
            &[("user_id", Value::from("u1")), ("active", Value::Bool(true))]
        );
    }

    #[test]
    fn validate_accepts_whitelisted_columns() {
        let filter = Filter::new().eq("user_id", "u1").eq("active", true);
        assert!(filter.validate_for(Table::StaffMembers).is_ok());
    }

    #[test]
    fn validate_rejects_unknown_column() {
        let filter = Filter::new().eq("name; drop table x", "u1");
        let err = filter.validate_for(Table::Organizations).unwrap_err();
        assert!(matches!(err, LookupError::InvalidQuery(_)));
    }

    #[test]
    fn table_names_match_schema() {
        assert_eq!(Table::Organizations.to_string(), "organizations");
        assert_eq!(Table::StaffMembers.as_str(), "staff_members");
        assert_eq!(Table::UserRoles.as_str(), "user_roles");
    }
}
