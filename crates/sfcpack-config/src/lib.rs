//! Build configuration assembler for single-file component bundles.
//!
//! Given a [`Mode`], the assembler produces the configurations handed to the
//! bundling engine: one app bundle in development, a UMD library bundle plus
//! a window-global bundle in production. Configurations are plain data built
//! from a shared base and merged override fragments (see [`merge`]).
//!
//! ```
//! use sfcpack_config::{assemble_project, LibraryTarget, Mode, ProjectSettings};
//!
//! let configs = assemble_project(Mode::ProductionLibrary, &ProjectSettings::default()).unwrap();
//! assert_eq!(configs.len(), 2);
//! assert_eq!(configs[0].output.library_target, Some(LibraryTarget::Umd));
//! assert_eq!(configs[1].output.library_target, Some(LibraryTarget::Window));
//! ```

pub mod assemble;
pub mod build;
pub mod cleanup;
pub mod error;
pub mod merge;
pub mod mode;
pub mod project;
pub mod settings;
pub mod validation;

// Re-export main types
pub use assemble::{assemble, assemble_from_env, ModeOverrides, OverrideTable};
pub use build::*;
pub use cleanup::{spawn_cleanup, spawn_cleanup_on, validate_output_dir, CleanupHandle};
pub use error::*;
pub use merge::{merge, merge_all};
pub use mode::{Mode, MODE_ENV_VAR};
pub use project::{
    assemble_project, assemble_project_from_env, base_configuration, project_overrides,
    StylePipeline, STYLE_INJECT_LOADER,
};
pub use settings::{FrameworkSettings, ProjectSettings, SETTINGS_ENV_PREFIX, SETTINGS_FILE};
pub use validation::{
    is_valid_identifier, validate_fs, validate_schema, ConfigValidator, FsValidator,
    SchemaValidator,
};
