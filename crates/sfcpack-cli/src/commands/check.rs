//! Check command implementation.
//!
//! Assembles every mode and validates the result without writing anything.

use sfcpack_config::{
    assemble_project, ConfigValidator, FsValidator, Mode, SchemaValidator,
};

use crate::cli::CheckArgs;
use crate::commands::Context;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load project settings
/// 2. Assemble each mode
/// 3. Structural validation of every configuration
/// 4. Entry files exist (unless `--no-fs`)
pub async fn execute(ctx: &Context, args: CheckArgs) -> Result<()> {
    ui::info("Checking configuration...");
    let settings = ctx.load_settings()?;

    let validator: Box<dyn ConfigValidator> = if args.no_fs {
        Box::new(SchemaValidator)
    } else {
        Box::new(FsValidator::new(&settings.root))
    };

    for mode in Mode::ALL {
        let configs = assemble_project(mode, &settings)?;
        for (index, config) in configs.iter().enumerate() {
            validator
                .validate(config)
                .map_err(|source| CliError::InvalidConfiguration {
                    mode: mode.to_string(),
                    index,
                    source,
                })?;
        }
        ui::success(&format!("  {mode}: {} configuration(s)", configs.len()));
    }

    ui::success("All checks passed!");
    Ok(())
}
