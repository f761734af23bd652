//! Resolve command implementation.

use sfcpack_config::{base_configuration, Mode, StdFileProbe};

use crate::cli::ResolveArgs;
use crate::commands::{utils, Context};
use crate::error::Result;

/// Print the file `args.request` resolves to.
///
/// Uses the development configuration's `resolve` block; aliases and
/// extensions are the same in every mode. Relative `--from` directories are
/// taken from the project directory.
pub async fn execute(ctx: &Context, args: ResolveArgs) -> Result<()> {
    let settings = ctx.load_settings()?;
    let config = base_configuration(&settings, Mode::Development)?;

    let from = match &args.from {
        Some(dir) => utils::resolve_path(dir, &ctx.project_dir),
        None => settings.root.join("src"),
    };

    let resolved = config.resolve.resolve(&args.request, &from, &StdFileProbe)?;
    println!("{}", resolved.display());
    Ok(())
}
