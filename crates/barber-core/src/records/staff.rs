use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A barber working at an organization.
///
/// Only records with `active = true` resolve their user as staff.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StaffMember {
    pub id: String,
    pub organization_id: String,
    /// Subject id of the linked account, if the barber has one.
    pub user_id: Option<String>,
    pub display_name: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}
