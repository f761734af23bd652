//! Assemble command implementation.
//!
//! Cleanup of the previous output is dispatched first and runs while the
//! configurations are assembled; it is awaited before anything is written.

use sfcpack_config::{
    assemble_project_from_env, spawn_cleanup, BuildConfiguration, ConfigValidator, Mode,
    SchemaValidator, MODE_ENV_VAR,
};

use crate::cli::AssembleArgs;
use crate::commands::Context;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;

/// Execute the assemble command.
///
/// # Steps
///
/// 1. Read the mode once: `--mode`, else `NODE_ENV`
/// 2. Load project settings
/// 3. Dispatch output cleanup (unless `--no-clean`)
/// 4. Assemble and validate the configurations
/// 5. Await cleanup, then write the JSON array
///
/// An unset or unrecognized mode produces an empty array and a warning, or
/// an error under `--strict`. Cleanup failures are reported, never fatal.
pub async fn execute(ctx: &Context, args: AssembleArgs) -> Result<()> {
    let raw_mode = args.mode.clone().or_else(|| std::env::var(MODE_ENV_VAR).ok());
    let mode = Mode::parse_optional(raw_mode.as_deref()).ok();

    if mode.is_none() && args.strict {
        return Err(CliError::UnrecognizedMode { value: raw_mode });
    }

    let settings = ctx.load_settings()?;

    let cleanup = if args.no_clean {
        None
    } else {
        Some(spawn_cleanup(settings.output_path(), &settings.root)?)
    };

    let configs = assemble_project_from_env(raw_mode.as_deref(), &settings)?;
    if let Some(mode) = mode {
        validate_all(mode, &configs)?;
        tracing::info!(%mode, count = configs.len(), "assembled configurations");
    } else {
        ui::warning(&format!(
            "{} is {}; no configuration assembled",
            MODE_ENV_VAR,
            raw_mode
                .as_deref()
                .map_or_else(|| "unset".to_string(), |value| format!("'{value}'"))
        ));
    }

    if let Some(handle) = cleanup {
        let path = handle.path().to_path_buf();
        if let Err(err) = handle.wait().await {
            ui::warning(&format!("Could not remove {}: {err}", path.display()));
        }
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&configs)?
    } else {
        serde_json::to_string(&configs)?
    };

    match &args.output {
        Some(path) => {
            let path = crate::commands::utils::resolve_path(path, &ctx.project_dir);
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await.with_path(parent)?;
            }
            tokio::fs::write(&path, json).await.with_path(&path)?;
            ui::success(&format!(
                "Wrote {} configuration(s) to {}",
                configs.len(),
                path.display()
            ));
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn validate_all(mode: Mode, configs: &[BuildConfiguration]) -> Result<()> {
    for (index, config) in configs.iter().enumerate() {
        SchemaValidator
            .validate(config)
            .map_err(|source| CliError::InvalidConfiguration {
                mode: mode.to_string(),
                index,
                source,
            })?;
    }
    Ok(())
}
