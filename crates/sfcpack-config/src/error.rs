//! Error types for configuration assembly, validation and loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unrecognized build mode: {value:?} (expected one of: dev, prod, development, production-library, production-window)")]
    UnrecognizedMode { value: String },

    #[error("invalid match pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("invalid config value for '{field}'{}", .hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    #[error("schema validation failed: {message}{}", .hint.as_ref().map(|h| format!(" (hint: {h})")).unwrap_or_default())]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    #[error("cannot resolve '{request}' from {}", from.display())]
    Unresolved { request: String, from: PathBuf },

    #[error("failed to load project settings: {0}")]
    Settings(String),

    #[error("failed to remove output directory {}: {source}", path.display())]
    Cleanup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("refusing to remove output directory {}: {reason}", path.display())]
    UnsafeOutputDir { path: PathBuf, reason: String },

    #[error("output directory cleanup was aborted: {}", .0.display())]
    CleanupAborted(PathBuf),

    #[error("no async runtime available: {0}")]
    Runtime(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Settings(err.to_string())
    }
}
