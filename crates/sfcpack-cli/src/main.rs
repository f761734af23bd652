//! sfcpack CLI entry point.
//!
//! Parses arguments, initializes logging, and dispatches to the command
//! implementations.

use clap::Parser;
use miette::Result;
use sfcpack_cli::{cli, commands, error, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let context = commands::Context::from_cli(&args).map_err(error::cli_error_to_miette)?;

    let result = match args.command {
        cli::Command::Assemble(assemble_args) => {
            commands::assemble_execute(&context, assemble_args).await
        }
        cli::Command::Clean(clean_args) => commands::clean_execute(&context, clean_args).await,
        cli::Command::Resolve(resolve_args) => {
            commands::resolve_execute(&context, resolve_args).await
        }
        cli::Command::Check(check_args) => commands::check_execute(&context, check_args).await,
        cli::Command::Schema(schema_args) => commands::schema_execute(schema_args),
    };

    result.map_err(error::cli_error_to_miette)
}
