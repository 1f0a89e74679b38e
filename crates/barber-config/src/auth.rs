//! Locally signed-in identity.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Subject id of the signed-in user. Empty means signed out.
    #[serde(default)]
    pub subject_id: String,

    #[serde(default)]
    pub email: String,
}

impl AuthConfig {
    pub fn is_signed_in(&self) -> bool {
        !self.subject_id.is_empty()
    }
}
