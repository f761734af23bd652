//! Command-line interface definition.
//!
//! # Command Structure
//!
//! - `sfcpack assemble` - Print the configurations for a build mode
//! - `sfcpack clean` - Remove the build output directory
//! - `sfcpack resolve` - Show which file an import resolves to
//! - `sfcpack check` - Validate every mode's configurations
//! - `sfcpack schema` - Print the settings schema or an example file

mod commands;
mod tests;

use clap::Parser;
use std::path::PathBuf;

pub use commands::{AssembleArgs, CheckArgs, CleanArgs, Command, ResolveArgs, SchemaArgs};

/// sfcpack - bundler configurations for single-file component projects
#[derive(Parser, Debug)]
#[command(
    name = "sfcpack",
    version,
    about = "Assemble bundler configurations for single-file component projects",
    long_about = "sfcpack builds the configuration objects a bundling engine consumes:\n\
                  one development app bundle, or a UMD library bundle plus a\n\
                  window-global bundle in production. The mode comes from NODE_ENV\n\
                  unless --mode is given."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Settings file to use instead of sfcpack.toml (TOML or JSON)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project directory (defaults to the current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
