//! Error handling for the sfcpack CLI.
//!
//! Library failures arrive as [`ConfigError`] and are wrapped by
//! [`CliError`]; `main` turns the result into a miette report.

mod miette;

use std::path::PathBuf;
use thiserror::Error;

use sfcpack_config::ConfigError;

pub use self::miette::cli_error_to_miette;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Errors from the configuration library
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The mode was unset or unrecognized under `--strict`
    #[error("Unrecognized build mode: {}", .value.as_deref().unwrap_or("<unset>"))]
    UnrecognizedMode { value: Option<String> },

    /// An assembled configuration failed validation
    #[error("Invalid {mode} configuration #{index}: {source}")]
    InvalidConfiguration {
        mode: String,
        index: usize,
        #[source]
        source: ConfigError,
    },

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Extension trait for adding path context to errors.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }
}
