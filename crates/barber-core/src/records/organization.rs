use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A barbershop. The subject in `owner_id` resolves as its owner.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    /// Listing flag. Does not affect owner resolution.
    pub active: bool,
    pub created_at: DateTime<Utc>,
}
