use crate::{error::ConfigError, validator};
use model::core::date_format::DEFAULT_DATE_FORMAT;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Settings injected into a filter compiler instance.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompilerSettings {
    #[serde(default)]
    pub date: DateSettings,
    #[serde(default)]
    pub capabilities: CapabilitySettings,
    #[serde(default)]
    pub like: LikeSettings,
    #[serde(default)]
    pub view_params: ViewParamKeys,
    #[serde(default)]
    pub sql: SqlSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateSettings {
    /// Format applied when an attribute declares none (or none usable).
    #[serde(default = "default_date_format")]
    pub default_format: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CapabilitySettings {
    /// Filter kinds removed from the backend's default capability set.
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LikeStrategy {
    /// Always emit a query-string node.
    #[default]
    QueryString,
    /// Emit a regular expression for known, non-analyzed attributes.
    RegexpForKeyword,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LikeSettings {
    #[serde(default)]
    pub strategy: LikeStrategy,
}

/// Names of the recognized view parameters (matched case-insensitively).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewParamKeys {
    #[serde(default = "default_filter_key")]
    pub filter: String,
    #[serde(default = "default_query_key")]
    pub query: String,
    #[serde(default = "default_native_only_key")]
    pub native_only: String,
    #[serde(default = "default_aggregations_key")]
    pub aggregations: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlSettings {
    #[serde(default = "default_id_column")]
    pub id_column: String,
    #[serde(default = "default_srid")]
    pub srid: i32,
}

impl CompilerSettings {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&content)?;
        info!("Loaded compiler settings from {}", path.display());
        Ok(settings)
    }

    /// Parses and validates a TOML settings document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: CompilerSettings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validator::validate(self)
    }
}

impl Default for DateSettings {
    fn default() -> Self {
        Self {
            default_format: default_date_format(),
        }
    }
}

impl Default for ViewParamKeys {
    fn default() -> Self {
        Self {
            filter: default_filter_key(),
            query: default_query_key(),
            native_only: default_native_only_key(),
            aggregations: default_aggregations_key(),
        }
    }
}

impl Default for SqlSettings {
    fn default() -> Self {
        Self {
            id_column: default_id_column(),
            srid: default_srid(),
        }
    }
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_filter_key() -> String {
    "f".to_string()
}

fn default_query_key() -> String {
    "q".to_string()
}

fn default_native_only_key() -> String {
    "native-only".to_string()
}

fn default_aggregations_key() -> String {
    "a".to_string()
}

fn default_id_column() -> String {
    "id".to_string()
}

fn default_srid() -> i32 {
    4326
}
