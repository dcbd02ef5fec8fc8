use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating compiler settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings document is not valid TOML for the settings schema.
    #[error("Failed to parse compiler settings: {0}")]
    Parse(#[from] toml::de::Error),

    /// One or more settings failed validation.
    #[error("Invalid compiler settings: {}", .0.join("; "))]
    Invalid(Vec<String>),
}
