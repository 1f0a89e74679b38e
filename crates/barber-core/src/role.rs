//! Resolved role assignment.
//!
//! `RoleAssignment` is a tagged enum so that combinations like an owner with a
//! staff id cannot be built. On the wire it flattens to
//! `{ "role", "organization_id", "staff_id" }`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;
use crate::errors::CoreError;

/// Role of a subject together with the identifiers that scope it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "RoleAssignmentView", try_from = "RoleAssignmentView")]
pub enum RoleAssignment {
    /// Subject owns `organization_id`.
    Owner { organization_id: String },
    /// Subject works at `organization_id`. `staff_id` is set when the
    /// assignment came from a staff record, and absent when it came from the
    /// generic role table.
    Staff {
        organization_id: String,
        staff_id: Option<String>,
    },
    Customer { organization_id: Option<String> },
    #[default]
    None,
}

impl RoleAssignment {
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Owner { .. } => Role::Owner,
            Self::Staff { .. } => Role::Staff,
            Self::Customer { .. } => Role::Customer,
            Self::None => Role::None,
        }
    }

    #[must_use]
    pub fn organization_id(&self) -> Option<&str> {
        match self {
            Self::Owner { organization_id } | Self::Staff { organization_id, .. } => {
                Some(organization_id)
            }
            Self::Customer { organization_id } => organization_id.as_deref(),
            Self::None => None,
        }
    }

    #[must_use]
    pub fn staff_id(&self) -> Option<&str> {
        match self {
            Self::Staff { staff_id, .. } => staff_id.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Build an assignment from a `(role, organization)` pair as stored in the
    /// generic role table. Never carries a staff id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `role` requires an organization and
    /// none is given.
    pub fn from_stored(role: Role, organization_id: Option<String>) -> Result<Self, CoreError> {
        match (role, organization_id) {
            (Role::Owner, Some(organization_id)) => Ok(Self::Owner { organization_id }),
            (Role::Staff, Some(organization_id)) => Ok(Self::Staff {
                organization_id,
                staff_id: None,
            }),
            (Role::Owner | Role::Staff, None) => Err(CoreError::Validation(format!(
                "role '{role}' requires an organization"
            ))),
            (Role::Customer, organization_id) => Ok(Self::Customer { organization_id }),
            (Role::None, _) => Ok(Self::None),
        }
    }
}

/// Flat wire shape of a [`RoleAssignment`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RoleAssignmentView {
    pub role: Role,
    pub organization_id: Option<String>,
    pub staff_id: Option<String>,
}

impl From<RoleAssignment> for RoleAssignmentView {
    fn from(value: RoleAssignment) -> Self {
        Self {
            role: value.role(),
            organization_id: value.organization_id().map(str::to_string),
            staff_id: value.staff_id().map(str::to_string),
        }
    }
}

impl TryFrom<RoleAssignmentView> for RoleAssignment {
    type Error = CoreError;

    fn try_from(view: RoleAssignmentView) -> Result<Self, Self::Error> {
        if view.staff_id.is_some() && view.role != Role::Staff {
            return Err(CoreError::Validation(format!(
                "staff_id is only valid for role 'staff', got '{}'",
                view.role
            )));
        }
        if view.role == Role::None && view.organization_id.is_some() {
            return Err(CoreError::Validation(
                "role 'none' cannot carry an organization".into(),
            ));
        }
        match Self::from_stored(view.role, view.organization_id)? {
            Self::Staff {
                organization_id, ..
            } => Ok(Self::Staff {
                organization_id,
                staff_id: view.staff_id,
            }),
            other => Ok(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn accessors_follow_variant() {
        let staff = RoleAssignment::Staff {
            organization_id: "org-1".into(),
            staff_id: Some("stf-1".into()),
        };
        assert_eq!(staff.role(), Role::Staff);
        assert_eq!(staff.organization_id(), Some("org-1"));
        assert_eq!(staff.staff_id(), Some("stf-1"));

        let owner = RoleAssignment::Owner {
            organization_id: "org-2".into(),
        };
        assert_eq!(owner.staff_id(), None);
        assert_eq!(RoleAssignment::None.organization_id(), None);
        assert!(RoleAssignment::default().is_none());
    }

    #[test]
    fn serializes_flat() {
        let owner = RoleAssignment::Owner {
            organization_id: "org-9".into(),
        };
        let value = serde_json::to_value(&owner).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"role": "owner", "organization_id": "org-9", "staff_id": null})
        );
    }

    #[test]
    fn none_serializes_with_nulls() {
        let value = serde_json::to_value(RoleAssignment::None).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"role": "none", "organization_id": null, "staff_id": null})
        );
    }

    #[test]
    fn from_stored_rejects_owner_without_organization() {
        assert!(RoleAssignment::from_stored(Role::Owner, None).is_err());
        assert!(RoleAssignment::from_stored(Role::Staff, None).is_err());
    }

    #[test]
    fn from_stored_never_sets_staff_id() {
        let assignment = RoleAssignment::from_stored(Role::Staff, Some("org-1".into())).unwrap();
        assert_eq!(assignment.staff_id(), None);
        assert_eq!(assignment.organization_id(), Some("org-1"));
    }

    #[test]
    fn customer_organization_is_optional() {
        let assignment = RoleAssignment::from_stored(Role::Customer, None).unwrap();
        assert_eq!(assignment, RoleAssignment::Customer { organization_id: None });
    }

    #[test]
    fn deserialize_rejects_owner_with_staff_id() {
        let json = r#"{"role":"owner","organization_id":"org-1","staff_id":"stf-1"}"#;
        assert!(serde_json::from_str::<RoleAssignment>(json).is_err());
    }

    #[test]
    fn deserialize_keeps_staff_id_for_staff() {
        let json = r#"{"role":"staff","organization_id":"org-1","staff_id":"stf-1"}"#;
        let assignment: RoleAssignment = serde_json::from_str(json).unwrap();
        assert_eq!(assignment.staff_id(), Some("stf-1"));
    }
}
