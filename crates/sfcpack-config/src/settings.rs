//! Project settings: paths and names the base configuration is built from.
//!
//! Settings are layered with figment. Priority: environment > settings file >
//! defaults.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format as _, Json, Serialized, Toml},
    Figment,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::build::PageOptions;
use crate::error::{ConfigError, Result};

/// Settings file looked up in the project directory
pub const SETTINGS_FILE: &str = "sfcpack.toml";

/// Prefix of environment overrides; nested keys are split on `__`
/// (`SFCPACK_PAGE__TITLE` sets `page.title`)
pub const SETTINGS_ENV_PREFIX: &str = "SFCPACK_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectSettings {
    /// Project root; relative paths below are resolved against it
    pub root: PathBuf,

    /// Build output directory, removed before each build
    pub output_dir: PathBuf,

    /// Demo application entry
    pub app_entry: PathBuf,

    /// Component entry of the library bundle
    pub component_entry: PathBuf,

    /// Name the library bundle is published under
    pub library_name: String,

    /// Global the window bundle is attached to
    pub window_global: String,

    /// Filename of the extracted stylesheet in production
    pub style_filename: String,

    pub framework: FrameworkSettings,

    pub page: PageOptions,
}

/// How the UI framework itself is resolved and externalized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct FrameworkSettings {
    /// Bare module id imported by application code
    pub module: String,

    /// Distribution that includes the template compiler
    pub full_build: String,

    /// Name the host provides the framework under in production builds
    pub external_name: String,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output_dir: PathBuf::from("dist"),
            app_entry: PathBuf::from("./src/build.js"),
            component_entry: PathBuf::from("./src/components/test.vue"),
            library_name: "test".to_string(),
            window_global: "AaaTest".to_string(),
            style_filename: "style.css".to_string(),
            framework: FrameworkSettings::default(),
            page: PageOptions::default(),
        }
    }
}

impl Default for FrameworkSettings {
    fn default() -> Self {
        Self {
            module: "vue".to_string(),
            full_build: "vue/dist/vue.esm.js".to_string(),
            external_name: "vue".to_string(),
        }
    }
}

impl ProjectSettings {
    /// Load settings for the project in `project_dir`.
    ///
    /// `explicit` names a settings file (TOML, or JSON by extension) that must
    /// exist; otherwise `sfcpack.toml` is used when present. The resulting
    /// `root` is absolute.
    pub fn load(project_dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        let mut settings: ProjectSettings = Self::figment(project_dir, explicit)?.extract()?;

        let root = std::path::absolute(project_dir.join(&settings.root))?;
        settings.root = path_clean::clean(root);

        tracing::debug!(root = %settings.root.display(), "loaded project settings");
        Ok(settings)
    }

    /// The provider stack [`ProjectSettings::load`] extracts from.
    pub fn figment(project_dir: &Path, explicit: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(ProjectSettings::default()));

        let file = match explicit {
            Some(path) => {
                let path = if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    project_dir.join(path)
                };
                if !path.is_file() {
                    return Err(ConfigError::Settings(format!(
                        "settings file not found: {}",
                        path.display()
                    )));
                }
                Some(path)
            }
            None => {
                let default_path = project_dir.join(SETTINGS_FILE);
                default_path.is_file().then_some(default_path)
            }
        };

        if let Some(path) = file {
            tracing::debug!(path = %path.display(), "reading settings file");
            figment = if path.extension().is_some_and(|ext| ext == "json") {
                figment.merge(Json::file(path))
            } else {
                figment.merge(Toml::file(path))
            };
        }

        Ok(figment.merge(Env::prefixed(SETTINGS_ENV_PREFIX).split("__")))
    }

    pub fn output_path(&self) -> PathBuf {
        self.resolve_path(&self.output_dir)
    }

    /// `path` joined onto the project root unless already absolute.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            path_clean::clean(self.root.join(path))
        }
    }

    /// Example `sfcpack.toml` holding the defaults.
    pub fn example_toml() -> Result<String> {
        toml::to_string_pretty(&ProjectSettings::default()).map_err(|e| {
            ConfigError::InvalidValue {
                field: "settings".to_string(),
                hint: Some(e.to_string()),
            }
        })
    }

    pub fn json_schema() -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(ProjectSettings)).unwrap_or_default()
    }
}
