//! `DataStore` over the local database.

use serde_json::Value;

use barber_core::store::{DataStore, Filter, LookupError, Row, Table};

use crate::error::DatabaseError;
use crate::helpers::{json_to_sql, row_to_json};
use crate::service::BarberService;

/// Build `SELECT * FROM {table} WHERE ... LIMIT ?n` with positional binds.
fn build_select(
    table: Table,
    filter: &Filter,
    limit: usize,
) -> Result<(String, Vec<libsql::Value>), DatabaseError> {
    let mut clauses = Vec::with_capacity(filter.conditions().len());
    let mut params = Vec::with_capacity(filter.conditions().len() + 1);
    for (column, value) in filter.conditions() {
        if value.is_null() {
            clauses.push(format!("{column} IS NULL"));
        } else {
            params.push(json_to_sql(value)?);
            clauses.push(format!("{column} = ?{}", params.len()));
        }
    }
    let limit = i64::try_from(limit)
        .map_err(|_| DatabaseError::Query(format!("limit {limit} out of range")))?;
    params.push(libsql::Value::Integer(limit));

    let where_clause = if clauses.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", clauses.join(" AND "))
    };
    let sql = format!(
        "SELECT * FROM {table}{where_clause} ORDER BY created_at, id LIMIT ?{}",
        params.len()
    );
    Ok((sql, params))
}

impl DataStore for BarberService {
    async fn query(
        &self,
        table: Table,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<Row>, LookupError> {
        filter.validate_for(table)?;
        let (sql, params) = build_select(table, filter, limit)?;
        tracing::debug!(%table, limit, sql = %sql, "local query");

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await
            .map_err(DatabaseError::from)?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await.map_err(DatabaseError::from)? {
            results.push(row_to_json(&row)?);
        }
        Ok(results)
    }

    async fn authorization_check(
        &self,
        subject_id: &str,
        privilege: &str,
    ) -> Result<Value, LookupError> {
        let held = self.has_privilege(subject_id, privilege).await?;
        Ok(Value::Bool(held))
    }
}
