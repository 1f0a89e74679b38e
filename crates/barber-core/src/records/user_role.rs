use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// A row of the generic role table, consulted after owner and staff lookups.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserRoleRecord {
    pub id: String,
    pub user_id: String,
    pub role: Role,
    pub organization_id: Option<String>,
    pub created_at: DateTime<Utc>,
}
