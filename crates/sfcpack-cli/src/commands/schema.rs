//! Schema command implementation.

use sfcpack_config::ProjectSettings;

use crate::cli::SchemaArgs;
use crate::error::Result;

/// Print the settings JSON Schema, or an example `sfcpack.toml`.
pub fn execute(args: SchemaArgs) -> Result<()> {
    if args.example {
        print!("{}", ProjectSettings::example_toml()?);
    } else {
        let schema = ProjectSettings::json_schema();
        println!("{}", serde_json::to_string_pretty(&schema)?);
    }
    Ok(())
}
