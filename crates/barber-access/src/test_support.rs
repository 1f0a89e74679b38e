//! In-memory `DataStore` and navigator doubles for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::{Value, json};

use barber_core::store::{DataStore, Filter, LookupError, Row, Table};

use crate::gate::Navigator;

/// A recorded store call: the table queried, or `None` for an authorization check.
pub type Call = Option<Table>;

#[derive(Default)]
pub struct FakeStore {
    rows: HashMap<Table, Vec<Row>>,
    answers: HashMap<String, Result<Value, LookupError>>,
    failing: HashMap<Table, LookupError>,
    calls: Mutex<Vec<Call>>,
}

fn row(value: Value) -> Row {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture row must be an object, got {other}"),
    }
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_row(mut self, table: Table, value: Value) -> Self {
        self.rows.entry(table).or_default().push(row(value));
        self
    }

    pub fn with_owner(self, org_id: &str, owner_id: &str) -> Self {
        self.with_row(
            Table::Organizations,
            json!({ "id": org_id, "owner_id": owner_id, "name": "Shop", "active": true }),
        )
    }

    pub fn with_staff(self, staff_id: &str, org_id: &str, user_id: &str, active: bool) -> Self {
        self.with_row(
            Table::StaffMembers,
            json!({ "id": staff_id, "organization_id": org_id, "user_id": user_id, "active": active }),
        )
    }

    pub fn with_role(self, user_id: &str, role: &str, org_id: Option<&str>) -> Self {
        self.with_row(
            Table::UserRoles,
            json!({ "id": "rol-1", "user_id": user_id, "role": role, "organization_id": org_id }),
        )
    }

    pub fn failing_on(mut self, table: Table, error: LookupError) -> Self {
        self.failing.insert(table, error);
        self
    }

    pub fn with_answer(mut self, subject: &str, answer: Result<Value, LookupError>) -> Self {
        self.answers.insert(subject.to_string(), answer);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl DataStore for FakeStore {
    async fn query(
        &self,
        table: Table,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<Row>, LookupError> {
        self.calls.lock().unwrap().push(Some(table));
        if let Some(error) = self.failing.get(&table) {
            return Err(error.clone());
        }
        let matches = self
            .rows
            .get(&table)
            .into_iter()
            .flatten()
            .filter(|row| {
                filter
                    .conditions()
                    .iter()
                    .all(|(col, value)| row.get(*col).unwrap_or(&Value::Null) == value)
            })
            .take(limit)
            .cloned()
            .collect();
        Ok(matches)
    }

    async fn authorization_check(
        &self,
        subject_id: &str,
        _privilege: &str,
    ) -> Result<Value, LookupError> {
        self.calls.lock().unwrap().push(None);
        self.answers
            .get(subject_id)
            .cloned()
            .unwrap_or(Ok(Value::Bool(false)))
    }
}

/// Navigator that records every redirect.
#[derive(Default)]
pub struct RecordingNavigator {
    pub redirects: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.redirects.lock().unwrap().push(path.to_string());
    }
}
