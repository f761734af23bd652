//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use miette::Report;
use sfcpack_config::ConfigError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::UnrecognizedMode { value } => miette::miette!(
            "Unrecognized build mode: {}\n\nHint: Set NODE_ENV or pass --mode with one of: dev, prod, development, production-library, production-window",
            value.as_deref().unwrap_or("<unset>")
        ),
        CliError::InvalidConfiguration {
            mode,
            index,
            source,
        } => miette::miette!(
            "Assembled {} configuration #{} is invalid: {}",
            mode,
            index,
            source
        ),
        _ => miette::miette!("{}", err),
    }
}

/// Convert ConfigError to miette Report
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::SchemaValidation { message, hint } => match hint {
            Some(hint) => miette::miette!("Invalid configuration: {}\n\nHint: {}", message, hint),
            None => miette::miette!("Invalid configuration: {}", message),
        },
        ConfigError::Unresolved { request, from } => miette::miette!(
            "Failed to resolve module: {}\nImported from: {}\n\nHint: Check the path, resolve.alias and resolve.extensions",
            request,
            from.display()
        ),
        ConfigError::Settings(message) => miette::miette!(
            "Failed to load settings: {}\n\nHint: Run 'sfcpack schema --example' for a valid sfcpack.toml",
            message
        ),
        ConfigError::UnsafeOutputDir { path, reason } => miette::miette!(
            "Refusing to remove {}: {}\n\nHint: Point output_dir at a directory inside the project, such as \"dist\", or pass --no-clean",
            path.display(),
            reason
        ),
        _ => miette::miette!("Configuration error: {}", err),
    }
}
