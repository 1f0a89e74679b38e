use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Privilege name checked by the admin gate.
pub const SUPER_ADMIN: &str = "super_admin";

/// A named privilege held by a subject (e.g. [`SUPER_ADMIN`]).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PrivilegeGrant {
    pub user_id: String,
    pub privilege: String,
    pub granted_at: DateTime<Utc>,
}
