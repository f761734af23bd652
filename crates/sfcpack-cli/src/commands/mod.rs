//! Command implementations for the sfcpack CLI.
//!
//! - [`assemble`] - Print the configurations for a build mode
//! - [`clean`] - Remove the build output directory
//! - [`resolve`] - Resolve an import
//! - [`check`] - Validate every mode
//! - [`schema`] - Settings schema and example file
//!
//! Each command provides an `execute` function taking the shared
//! [`Context`] and its parsed arguments.

pub mod assemble;
pub mod check;
pub mod clean;
pub mod resolve;
pub mod schema;
pub(crate) mod utils;

use std::path::PathBuf;

use sfcpack_config::ProjectSettings;

use crate::cli::Cli;
use crate::error::{CliError, Result};

pub use assemble::execute as assemble_execute;
pub use check::execute as check_execute;
pub use clean::execute as clean_execute;
pub use resolve::execute as resolve_execute;
pub use schema::execute as schema_execute;

/// Project location and settings source shared by all commands
#[derive(Debug, Clone)]
pub struct Context {
    pub project_dir: PathBuf,
    pub config: Option<PathBuf>,
}

impl Context {
    /// Build the context from the global flags.
    ///
    /// # Errors
    ///
    /// Fails when `--cwd` does not name a directory.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = utils::get_cwd()?;
        let project_dir = match &cli.cwd {
            Some(dir) => utils::resolve_path(dir, &cwd),
            None => cwd,
        };

        if !project_dir.is_dir() {
            return Err(CliError::FileNotFound(project_dir));
        }

        Ok(Self {
            project_dir,
            config: cli.config.clone(),
        })
    }

    /// Load the layered project settings.
    pub fn load_settings(&self) -> Result<ProjectSettings> {
        Ok(ProjectSettings::load(
            &self.project_dir,
            self.config.as_deref(),
        )?)
    }
}
