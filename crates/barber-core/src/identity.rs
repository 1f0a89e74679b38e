use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Authenticated subject handed out by the identity provider.
///
/// Created on sign-in and dropped on sign-out. Resolvers only ever borrow it;
/// the `subject_id` is the lookup key for every role query and the cache key
/// for resolved assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Identity {
    /// Stable unique identifier of the subject.
    pub subject_id: String,
    /// Email claim, when the provider supplies one.
    #[serde(default)]
    pub email: Option<String>,
    /// Free-form provider attributes (e.g. `full_name`).
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl Identity {
    #[must_use]
    pub fn new(subject_id: impl Into<String>) -> Self {
        Self {
            subject_id: subject_id.into(),
            email: None,
            attributes: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }
}

/// What the identity provider currently reports.
///
/// `loading` is true while the provider is still restoring a session; in that
/// window `identity` carries no meaning and consumers must wait.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IdentitySnapshot {
    pub identity: Option<Identity>,
    pub loading: bool,
}

impl IdentitySnapshot {
    /// Snapshot reported before the provider has restored a session.
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            identity: None,
            loading: true,
        }
    }

    #[must_use]
    pub const fn signed_out() -> Self {
        Self {
            identity: None,
            loading: false,
        }
    }

    #[must_use]
    pub const fn signed_in(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
            loading: false,
        }
    }

    /// Subject of the current identity, if any.
    #[must_use]
    pub fn subject_id(&self) -> Option<&str> {
        self.identity.as_ref().map(Identity::subject_id)
    }
}
