use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available sfcpack subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble the build configurations for a mode
    ///
    /// Removes the previous build output, assembles the configurations for
    /// the mode, validates them, and writes them as a JSON array.
    Assemble(AssembleArgs),

    /// Remove the build output directory
    Clean(CleanArgs),

    /// Resolve an import with the project's resolution rules
    ///
    /// Applies aliases and extension probing the way the bundling engine
    /// would and prints the file the import lands on.
    Resolve(ResolveArgs),

    /// Validate the configurations of every mode
    ///
    /// Runs structural checks and verifies that entry files exist.
    Check(CheckArgs),

    /// Print the JSON Schema of the settings file
    Schema(SchemaArgs),
}

/// Arguments for the assemble command
#[derive(Args, Debug, Default)]
pub struct AssembleArgs {
    /// Build mode (dev, prod, development, production-library,
    /// production-window). Defaults to the value of NODE_ENV.
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Fail instead of warning when the mode is unset or unrecognized
    #[arg(long)]
    pub strict: bool,

    /// Keep the previous build output
    #[arg(long)]
    pub no_clean: bool,

    /// Write the configurations to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the clean command
#[derive(Args, Debug, Default)]
pub struct CleanArgs {}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Import request, e.g. `./components/foo` or `vue`
    #[arg(value_name = "REQUEST")]
    pub request: String,

    /// Directory of the importing file (defaults to the project's src/)
    #[arg(long, value_name = "DIR")]
    pub from: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Skip checking that entry files exist
    #[arg(long)]
    pub no_fs: bool,
}

/// Arguments for the schema command
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {
    /// Print an example sfcpack.toml with the defaults instead
    #[arg(long)]
    pub example: bool,
}
