//! Stored records that decide a subject's role.
//!
//! Each record maps to one table of the backing store. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON output and schema
//! validation.

mod organization;
mod privilege;
mod staff;
mod user_role;

pub use organization::Organization;
pub use privilege::{PrivilegeGrant, SUPER_ADMIN};
pub use staff::StaffMember;
pub use user_role::UserRoleRecord;
