//! Row conversion helpers.
//!
//! Repos convert `libsql::Row` (column-indexed) into typed records, and the
//! `DataStore` impl converts rows into JSON objects keyed by column name.
//! Both need to cope with `SQLite`'s `datetime('now')` format and its
//! integer-encoded booleans.

use chrono::{DateTime, Utc};
use serde_json::Value;

use barber_core::enums::Role;
use barber_core::store::Row;

use crate::error::DatabaseError;

/// Columns stored as `INTEGER` 0/1 that surface as JSON booleans.
const BOOL_COLUMNS: &[&str] = &["active"];

/// Parse a TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a stored role name.
///
/// # Errors
///
/// Returns `DatabaseError::Query` for values outside `owner|staff|customer`.
pub fn parse_role(s: &str) -> Result<Role, DatabaseError> {
    match s.parse::<Role>() {
        Ok(role) if role != Role::None => Ok(role),
        _ => Err(DatabaseError::Query(format!("Invalid stored role '{s}'"))),
    }
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Convert a full row into a JSON object keyed by column name.
///
/// # Errors
///
/// Returns `DatabaseError` if a column cannot be read or a BLOB is encountered.
pub fn row_to_json(row: &libsql::Row) -> Result<Row, DatabaseError> {
    let mut map = Row::new();
    for idx in 0..row.column_count() {
        let name = row
            .column_name(idx)
            .ok_or_else(|| DatabaseError::Query(format!("column {idx} has no name")))?
            .to_string();
        let value = match row.get_value(idx)? {
            libsql::Value::Null => Value::Null,
            libsql::Value::Integer(i) if BOOL_COLUMNS.contains(&name.as_str()) => {
                Value::Bool(i != 0)
            }
            libsql::Value::Integer(i) => Value::from(i),
            libsql::Value::Real(f) => Value::from(f),
            libsql::Value::Text(s) => Value::String(s),
            libsql::Value::Blob(_) => {
                return Err(DatabaseError::Query(format!(
                    "column '{name}' holds a BLOB, which rows cannot carry"
                )));
            }
        };
        map.insert(name, value);
    }
    Ok(map)
}

/// Convert a JSON filter value into a libSQL bind parameter.
///
/// `Null` has no bind form (`= NULL` never matches) and must be rendered as
/// `IS NULL` by the caller.
///
/// # Errors
///
/// Returns `DatabaseError::Query` for `Null`, arrays, and objects.
pub fn json_to_sql(value: &Value) -> Result<libsql::Value, DatabaseError> {
    match value {
        Value::Bool(b) => Ok(libsql::Value::Integer(i64::from(*b))),
        Value::Number(n) => n
            .as_i64()
            .map(libsql::Value::Integer)
            .or_else(|| n.as_f64().map(libsql::Value::Real))
            .ok_or_else(|| DatabaseError::Query(format!("unsupported number {n}"))),
        Value::String(s) => Ok(libsql::Value::Text(s.clone())),
        other => Err(DatabaseError::Query(format!(
            "unsupported filter value {other}"
        ))),
    }
}
