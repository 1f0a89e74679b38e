//! Role resolution.
//!
//! A subject's role comes from the first of three lookups that matches:
//!
//! ```text
//! organizations (owner_id = subject)             → owner
//! staff_members (user_id = subject, active)      → staff (with staff id)
//! user_roles    (user_id = subject)              → stored role
//! (nothing)                                      → none
//! ```
//!
//! A lookup failure at any step ends resolution with that error; it never
//! falls through to the next step. A `user_roles` row naming a role this app
//! does not know (a privilege row such as `super_admin`, say) resolves to
//! none.

use serde::Deserialize;

use barber_core::enums::Role;
use barber_core::identity::Identity;
use barber_core::role::RoleAssignment;
use barber_core::store::{DataStore, Filter, Row, Table};

use crate::error::AccessError;

/// One lookup in the resolution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LookupStep {
    Owner,
    ActiveStaff,
    RoleTable,
}

#[derive(Deserialize)]
struct OwnedOrganization {
    id: String,
}

#[derive(Deserialize)]
struct StaffRecord {
    id: String,
    organization_id: String,
}

#[derive(Deserialize)]
struct RoleRecord {
    role: String,
    #[serde(default)]
    organization_id: Option<String>,
}

impl LookupStep {
    const ORDER: [Self; 3] = [Self::Owner, Self::ActiveStaff, Self::RoleTable];

    const fn table(self) -> Table {
        match self {
            Self::Owner => Table::Organizations,
            Self::ActiveStaff => Table::StaffMembers,
            Self::RoleTable => Table::UserRoles,
        }
    }

    fn filter(self, subject_id: &str) -> Filter {
        match self {
            Self::Owner => Filter::new().eq("owner_id", subject_id),
            Self::ActiveStaff => Filter::new().eq("user_id", subject_id).eq("active", true),
            Self::RoleTable => Filter::new().eq("user_id", subject_id),
        }
    }

    fn assignment(self, subject_id: &str, row: Row) -> Result<RoleAssignment, AccessError> {
        let table = self.table();
        let inconsistent = |reason: String| AccessError::InconsistentRecord { table, reason };
        let value = serde_json::Value::Object(row);

        match self {
            Self::Owner => {
                let org: OwnedOrganization =
                    serde_json::from_value(value).map_err(|e| inconsistent(e.to_string()))?;
                Ok(RoleAssignment::Owner {
                    organization_id: org.id,
                })
            }
            Self::ActiveStaff => {
                let staff: StaffRecord =
                    serde_json::from_value(value).map_err(|e| inconsistent(e.to_string()))?;
                Ok(RoleAssignment::Staff {
                    organization_id: staff.organization_id,
                    staff_id: Some(staff.id),
                })
            }
            Self::RoleTable => {
                let record: RoleRecord =
                    serde_json::from_value(value).map_err(|e| inconsistent(e.to_string()))?;
                let role = match record.role.parse::<Role>() {
                    Ok(Role::None) => return Ok(RoleAssignment::None),
                    Ok(role) => role,
                    Err(_) => {
                        tracing::warn!(
                            subject_id,
                            stored_role = %record.role,
                            "unrecognised stored role, resolving to none"
                        );
                        return Ok(RoleAssignment::None);
                    }
                };
                RoleAssignment::from_stored(role, record.organization_id)
                    .map_err(|e| inconsistent(e.to_string()))
            }
        }
    }
}

/// Resolves an identity to a [`RoleAssignment`] against a [`DataStore`].
///
/// Read-only and idempotent: with unchanged data, repeated calls return equal
/// assignments. No caching happens here; see [`crate::cache::CachedResolver`].
pub struct RoleResolver<S> {
    store: S,
}

impl<S: DataStore> RoleResolver<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Resolve `identity`. An absent identity resolves to
    /// [`RoleAssignment::None`] without touching the store.
    ///
    /// # Errors
    ///
    /// Returns `AccessError::Lookup` as soon as any lookup fails, and
    /// `AccessError::InconsistentRecord` when the matching row cannot form a
    /// valid assignment.
    pub async fn resolve(&self, identity: Option<&Identity>) -> Result<RoleAssignment, AccessError> {
        let Some(identity) = identity else {
            return Ok(RoleAssignment::None);
        };
        self.resolve_subject(identity.subject_id()).await
    }

    /// Resolve by subject id directly.
    ///
    /// # Errors
    ///
    /// Same as [`Self::resolve`].
    pub async fn resolve_subject(&self, subject_id: &str) -> Result<RoleAssignment, AccessError> {
        for step in LookupStep::ORDER {
            let rows = self
                .store
                .query(step.table(), &step.filter(subject_id), 1)
                .await
                .inspect_err(|error| {
                    tracing::debug!(subject_id, ?step, %error, "role lookup failed");
                })?;

            if let Some(row) = rows.into_iter().next() {
                let assignment = step.assignment(subject_id, row)?;
                tracing::debug!(subject_id, ?step, role = %assignment.role(), "role resolved");
                return Ok(assignment);
            }
        }

        tracing::debug!(subject_id, "no role found");
        Ok(RoleAssignment::None)
    }
}
