//! ID prefix constants.
//!
//! IDs are `{prefix}-{8 hex chars}`, e.g. `org-a3f8b2c1`. The random part is
//! produced by the database (`randomblob(4)`), so only the prefixes live here.

pub const PREFIX_ORGANIZATION: &str = "org";
pub const PREFIX_STAFF: &str = "stf";
pub const PREFIX_ROLE: &str = "rol";

/// Format a prefixed ID from a prefix and a hex suffix.
#[must_use]
pub fn format_id(prefix: &str, hex: &str) -> String {
    format!("{prefix}-{hex}")
}
