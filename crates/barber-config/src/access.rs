//! Access gate configuration.

use serde::{Deserialize, Serialize};

fn default_sign_in_path() -> String {
    "/auth".to_string()
}

fn default_home_path() -> String {
    "/".to_string()
}

fn default_admin_privilege() -> String {
    "super_admin".to_string()
}

const fn default_cache_roles() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccessConfig {
    /// Where unauthenticated visitors are sent.
    #[serde(default = "default_sign_in_path")]
    pub sign_in_path: String,

    /// Where signed-in visitors without the admin privilege are sent.
    #[serde(default = "default_home_path")]
    pub home_path: String,

    /// Privilege name checked by the admin gate.
    #[serde(default = "default_admin_privilege")]
    pub admin_privilege: String,

    /// Whether resolved role assignments are cached per subject.
    #[serde(default = "default_cache_roles")]
    pub cache_roles: bool,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            sign_in_path: default_sign_in_path(),
            home_path: default_home_path(),
            admin_privilege: default_admin_privilege(),
            cache_roles: default_cache_roles(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = AccessConfig::default();
        assert_eq!(config.sign_in_path, "/auth");
        assert_eq!(config.home_path, "/");
        assert_eq!(config.admin_privilege, "super_admin");
        assert!(config.cache_roles);
    }
}
