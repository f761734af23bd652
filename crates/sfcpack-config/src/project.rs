//! The component project's base configuration and production overrides.

use serde_json::json;

use crate::assemble::{assemble, warn_unrecognized_mode, ModeOverrides, OverrideTable};
use crate::build::{
    BuildConfiguration, ConfigOverride, Enforce, Entry, ExcludePredicate, LibraryTarget,
    LoaderSpec, ModuleRule, OutputOptions, PluginDescriptor, Resolution, SourceMapStrategy,
    STYLE_EXTRACT_LOADER,
};
use crate::error::Result;
use crate::mode::Mode;
use crate::settings::ProjectSettings;

/// Loader that injects styles at runtime and supports hot replacement
pub const STYLE_INJECT_LOADER: &str = "vue-style-loader";

/// How styles reach the page, decided once per assembly
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StylePipeline {
    /// Injected at runtime; development only
    Inject,
    /// Extracted into a static stylesheet linked from the page
    Extract { filename: String },
}

impl StylePipeline {
    pub fn for_mode(mode: Mode, filename: &str) -> Self {
        if mode.is_production() {
            StylePipeline::Extract {
                filename: filename.to_string(),
            }
        } else {
            StylePipeline::Inject
        }
    }

    /// First loader of every style rule.
    pub fn style_loader(&self) -> LoaderSpec {
        match self {
            StylePipeline::Inject => LoaderSpec::new(STYLE_INJECT_LOADER),
            StylePipeline::Extract { .. } => LoaderSpec::new(STYLE_EXTRACT_LOADER),
        }
    }

    /// Plugin the pipeline needs registered, if any.
    pub fn plugin(&self) -> Option<PluginDescriptor> {
        match self {
            StylePipeline::Inject => None,
            StylePipeline::Extract { filename } => {
                Some(PluginDescriptor::style_extraction(filename))
            }
        }
    }

    pub fn hot_reload(&self) -> bool {
        matches!(self, StylePipeline::Inject)
    }
}

/// Base configuration shared by every build target of the project.
pub fn base_configuration(settings: &ProjectSettings, mode: Mode) -> Result<BuildConfiguration> {
    let styles = StylePipeline::for_mode(mode, &settings.style_filename);

    let rules = vec![
        ModuleRule::new(r"\.(js|vue)$")?
            .enforce(Enforce::Pre)
            .loader("eslint-loader")
            .exclude(ExcludePredicate::dependencies()?),
        ModuleRule::new(r"\.scss$")?
            .loaders([styles.style_loader()])
            .loader("css-loader")
            .loader("sass-loader"),
        ModuleRule::new(r"\.sass$")?
            .loaders([styles.style_loader()])
            .loader("css-loader")
            .loader_with("sass-loader", json!({ "indentedSyntax": true })),
        ModuleRule::new(r"\.js$")?
            .loader("babel-loader")
            .exclude(ExcludePredicate::dependencies_except_compiled_components()?),
        ModuleRule::new(r"\.vue$")?
            .loader_with("vue-loader", json!({ "hotReload": styles.hot_reload() })),
        ModuleRule::new(r"\.css$")?
            .loaders([styles.style_loader()])
            .loader("css-loader"),
    ];

    // The page generator embeds the extracted stylesheet, so it goes last.
    let mut plugins = vec![PluginDescriptor::template_compiler()];
    plugins.extend(styles.plugin());
    plugins.push(PluginDescriptor::html_page(&settings.page));

    let framework = &settings.framework;
    let resolve = Resolution::default()
        .with_alias(format!("{}$", framework.module), framework.full_build.clone())
        .with_extensions([".vue", ".js", ".json"]);

    tracing::debug!(%mode, ?styles, "built base configuration");

    Ok(BuildConfiguration {
        entry: Some(Entry::named("app", settings.app_entry.clone())),
        rules,
        plugins,
        resolve,
        output: OutputOptions {
            path: Some(settings.output_path()),
            ..Default::default()
        },
        devtool: None,
        externals: None,
    })
}

/// Production overrides: source maps plus the externalized framework on the
/// shared base, then the UMD library and window-global variants.
pub fn project_overrides(settings: &ProjectSettings) -> OverrideTable {
    let shared = ConfigOverride::new()
        .devtool(SourceMapStrategy::SourceMap)
        .external(
            settings.framework.module.clone(),
            settings.framework.external_name.clone(),
        );

    let library = ConfigOverride::new()
        .entry(Entry::path(settings.component_entry.clone()))
        .output(OutputOptions {
            filename: Some("[hash].js".to_string()),
            library_target: Some(LibraryTarget::Umd),
            library: Some(settings.library_name.clone()),
            umd_named_define: Some(true),
            ..Default::default()
        });

    let window = ConfigOverride::new()
        .entry(Entry::path(settings.resolve_path(&settings.app_entry)))
        .output(OutputOptions {
            filename: Some("[hash].min.js".to_string()),
            library_target: Some(LibraryTarget::Window),
            library: Some(settings.window_global.clone()),
            ..Default::default()
        });

    let production = ModeOverrides {
        shared: Some(shared),
        variants: vec![library, window],
    };

    OverrideTable::new()
        .with_mode(Mode::ProductionLibrary, production.clone())
        .with_mode(Mode::ProductionWindow, production)
}

/// Base configuration plus project overrides, assembled for `mode`.
pub fn assemble_project(mode: Mode, settings: &ProjectSettings) -> Result<Vec<BuildConfiguration>> {
    let base = base_configuration(settings, mode)?;
    Ok(assemble(mode, &base, &project_overrides(settings)))
}

/// [`assemble_project`] for a raw mode value such as `NODE_ENV`.
///
/// An unset or unrecognized value logs a warning and yields no
/// configuration.
pub fn assemble_project_from_env(
    raw: Option<&str>,
    settings: &ProjectSettings,
) -> Result<Vec<BuildConfiguration>> {
    match Mode::parse_optional(raw) {
        Ok(mode) => assemble_project(mode, settings),
        Err(_) => {
            warn_unrecognized_mode(raw);
            Ok(Vec::new())
        }
    }
}
