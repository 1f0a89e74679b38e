//! Errors from loading and checking `BarberConfig`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A layer (TOML file or `BARBER_` env var) failed to parse or merge.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A section the command needs is empty in every layer.
    #[error(
        "Configuration section '{section}' is not configured: set it in .barber/config.toml or via BARBER_* env vars"
    )]
    NotConfigured { section: &'static str },

    /// A field loaded but holds a value the access layer rejects.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
