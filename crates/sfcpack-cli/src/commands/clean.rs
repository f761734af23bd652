//! Clean command implementation.

use sfcpack_config::spawn_cleanup;

use crate::cli::CleanArgs;
use crate::commands::Context;
use crate::error::Result;
use crate::ui;

/// Remove the configured output directory and wait for it to finish.
///
/// A directory that does not exist counts as removed.
pub async fn execute(ctx: &Context, _args: CleanArgs) -> Result<()> {
    let settings = ctx.load_settings()?;
    let handle = spawn_cleanup(settings.output_path(), &settings.root)?;
    let path = handle.path().to_path_buf();

    handle.wait().await?;

    ui::success(&format!("Removed {}", path.display()));
    Ok(())
}
