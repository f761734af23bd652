//! Pluggable config validation strategies
//!
//! Separates structural checks from filesystem checks (for CLI use).

use std::path::{Path, PathBuf};

use crate::build::{unknown_placeholders, BuildConfiguration, LibraryTarget};
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &BuildConfiguration) -> Result<()>;
}

/// Structural validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use sfcpack_config::{BuildConfiguration, ConfigValidator, Entry, SchemaValidator};
///
/// let config = BuildConfiguration {
///     entry: Some(Entry::path("./src/main.js")),
///     ..Default::default()
/// };
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfiguration) -> Result<()> {
        match &config.entry {
            None => {
                return Err(schema_error(
                    "no entry point specified",
                    "Set 'entry' to a source file or a map of bundle names to files",
                ));
            }
            Some(entry) if entry.is_empty() => {
                return Err(schema_error(
                    "entry point is empty",
                    "Remove the empty entry or point it at a source file",
                ));
            }
            Some(_) => {}
        }

        for ext in &config.resolve.extensions {
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(schema_error(
                    format!("resolve extension '{ext}' must start with a dot"),
                    "Write extensions as '.vue', '.js', ...",
                ));
            }
        }

        for (pattern, target) in &config.resolve.alias {
            if pattern.trim_end_matches('$').is_empty() || target.trim().is_empty() {
                return Err(schema_error(
                    format!("alias '{pattern}' -> '{target}' has an empty side"),
                    "Both the module id and its replacement must be non-empty",
                ));
            }
        }

        for plugin in &config.plugins {
            if plugin.name.trim().is_empty() {
                return Err(schema_error(
                    "plugin name cannot be empty",
                    "Give every plugin descriptor a name",
                ));
            }
        }

        for rule in &config.rules {
            if rule.loaders.is_empty() {
                return Err(schema_error(
                    format!("rule {:?} has no loaders", rule.test),
                    "Add at least one loader to the rule's 'use' list",
                ));
            }
        }

        if let Some(externals) = &config.externals {
            for (module, global) in externals {
                if module.trim().is_empty() || global.trim().is_empty() {
                    return Err(schema_error(
                        "external module ids and names cannot be empty",
                        "Remove empty keys or values from 'externals'",
                    ));
                }
            }
        }

        validate_output(config)
    }
}

fn validate_output(config: &BuildConfiguration) -> Result<()> {
    let output = &config.output;

    if let Some(filename) = &output.filename {
        let unknown = unknown_placeholders(filename);
        if !unknown.is_empty() {
            return Err(schema_error(
                format!(
                    "output filename '{filename}' uses unknown placeholders: {}",
                    unknown.join(", ")
                ),
                "Supported placeholders are [hash], [chunkhash], [name], [id], [query]",
            ));
        }
    }

    let target = output.library_target.unwrap_or_default();

    match &output.library {
        Some(name) => {
            if target != LibraryTarget::Commonjs2 && !is_valid_identifier(name) {
                return Err(schema_error(
                    format!("library name '{name}' is not a valid JavaScript identifier"),
                    "Use letters, digits, '_' or '$', not starting with a digit",
                ));
            }
        }
        None if output.library_target.is_some() && target.requires_library_name() => {
            return Err(schema_error(
                format!("library target {target:?} requires a library name"),
                "Set 'output.library'",
            ));
        }
        None => {}
    }

    if output.umd_named_define == Some(true) && target != LibraryTarget::Umd {
        return Err(schema_error(
            "umdNamedDefine only applies to the umd library target",
            "Drop 'umdNamedDefine' or switch 'libraryTarget' to umd",
        ));
    }

    Ok(())
}

/// Whether `name` is usable as a JavaScript identifier.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

fn schema_error(message: impl Into<String>, hint: &str) -> ConfigError {
    ConfigError::SchemaValidation {
        message: message.into(),
        hint: Some(hint.to_string()),
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs [`SchemaValidator`], then checks that every entry source exists
/// relative to the project root.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfiguration) -> Result<()> {
        SchemaValidator.validate(config)?;

        if let Some(entry) = &config.entry {
            for source in entry.sources() {
                let path = self.root.join(source);
                if !path.is_file() {
                    return Err(schema_error(
                        format!("entry not found: {}", path.display()),
                        "Check the entry paths in your project settings",
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Convenience function for structural validation
pub fn validate_schema(config: &BuildConfiguration) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &BuildConfiguration, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}
