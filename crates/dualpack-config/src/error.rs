//! Error types for descriptor construction and project loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Filesystem validation errors (for CLI use)
    #[error("app module not found: {}", path.display())]
    AppModuleNotFound { path: PathBuf },

    #[error("HTML template not found: {}", path.display())]
    TemplateNotFound { path: PathBuf },

    // Config parsing/loading errors
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("invalid config value for '{field}'{}", hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    // Schema validation errors (no filesystem checks)
    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // Construction-time invariant violations
    #[error("loader rules '{first}' and '{second}' both match '.{extension}' files")]
    OverlappingRules {
        first: String,
        second: String,
        extension: String,
    },

    #[error("loader rule '{rule}' matches no file extensions")]
    EmptyMatcher { rule: String },

    #[error("invalid loader pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("style extraction must run before HTML emission (extraction at {extraction}, emission at {emission})")]
    PluginOrder { extraction: usize, emission: usize },

    #[error("plugin '{0}' appears more than once")]
    DuplicatePlugin(String),

    #[error("cache group '{0}' is defined more than once")]
    DuplicateCacheGroup(String),
}
