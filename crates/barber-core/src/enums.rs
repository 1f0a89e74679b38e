//! Role and access-state enums.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` for SQL storage and query filters.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Role of a subject within the booking app.
///
/// Owner and Staff are scoped to an organization; Customer may be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Owner,
    Staff,
    Customer,
    None,
}

impl Role {
    /// Roles that may appear in the `user_roles` table.
    pub const STORED: [Self; 3] = [Self::Owner, Self::Staff, Self::Customer];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Staff => "staff",
            Self::Customer => "customer",
            Self::None => "none",
        }
    }

    /// Whether an assignment with this role must carry an organization.
    #[must_use]
    pub const fn requires_organization(self) -> bool {
        matches!(self, Self::Owner | Self::Staff)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(Self::Owner),
            "staff" => Ok(Self::Staff),
            "customer" => Ok(Self::Customer),
            "none" => Ok(Self::None),
            other => Err(CoreError::InvalidValue {
                field: "role".into(),
                value: other.into(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// AccessState
// ---------------------------------------------------------------------------

/// State of the admin access gate.
///
/// ```text
/// initializing → unauthenticated   (redirect to sign-in)
///              → unauthorized      (redirect to home)
///              → authorized
/// ```
///
/// The gate is re-evaluated on every input change, so any state can follow
/// any other once the identity changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AccessState {
    Initializing,
    Unauthenticated,
    Unauthorized,
    Authorized,
}

impl AccessState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initializing => "initializing",
            Self::Unauthenticated => "unauthenticated",
            Self::Unauthorized => "unauthorized",
            Self::Authorized => "authorized",
        }
    }

    /// Whether the state is settled (no more input expected to change it).
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Initializing)
    }
}

impl fmt::Display for AccessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
