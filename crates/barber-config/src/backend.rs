//! Hosted backend (REST + RPC) configuration.

use serde::{Deserialize, Serialize};

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Project URL (e.g., `https://abc.backend.example`).
    #[serde(default)]
    pub url: String,

    /// Public (anon) API key sent as the `apikey` header.
    #[serde(default)]
    pub anon_key: String,

    /// Signed-in user's access token. Falls back to `anon_key` when empty.
    #[serde(default)]
    pub access_token: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            access_token: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl BackendConfig {
    /// Check if the backend config has the minimum required fields.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }

    /// Token used for the `Authorization: Bearer` header.
    pub fn bearer_token(&self) -> &str {
        if self.access_token.is_empty() {
            &self.anon_key
        } else {
            &self.access_token
        }
    }
}
