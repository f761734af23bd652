//! Build configuration records handed to the bundling engine.

mod entry;
mod output;
mod plugin;
mod resolve;
mod rule;
mod types;

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::path::Path;

pub use entry::Entry;
pub use output::{unknown_placeholders, OutputOptions, FILENAME_PLACEHOLDERS};
pub use plugin::{
    MetaTag, PageOptions, PluginDescriptor, HTML_PAGE_PLUGIN, STYLE_EXTRACT_LOADER,
    STYLE_EXTRACT_PLUGIN, TEMPLATE_COMPILER_PLUGIN,
};
pub use resolve::{FileProbe, Resolution, StdFileProbe, DEFAULT_EXTENSIONS};
pub use rule::{
    ExcludePredicate, LoaderSpec, MatchPattern, ModuleRule, COMPILED_COMPONENT_PATTERN,
    DEPENDENCY_DIR_PATTERN,
};
pub use types::{ArrayField, Enforce, LibraryTarget, SourceMapStrategy};

use crate::error::{ConfigError, Result};

/// One fully specified build target
///
/// Assembled once per invocation and never mutated afterwards; consumers get
/// it by value or serialize it for the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BuildConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<Entry>,

    /// Module transformation rules in declaration order
    #[serde(default)]
    pub rules: Vec<ModuleRule>,

    #[serde(default)]
    pub plugins: Vec<PluginDescriptor>,

    #[serde(default)]
    pub resolve: Resolution,

    #[serde(default, skip_serializing_if = "OutputOptions::is_empty")]
    pub output: OutputOptions,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<SourceMapStrategy>,

    /// Module id to the name the host environment provides it under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub externals: Option<IndexMap<String, String>>,
}

impl BuildConfiguration {
    /// Rules in execution order: `pre`, then normal, then `post`. Declaration
    /// order is kept within each class.
    pub fn ordered_rules(&self) -> Vec<&ModuleRule> {
        let mut rules: Vec<&ModuleRule> = self.rules.iter().collect();
        rules.sort_by_key(|rule| rule.enforce);
        rules
    }

    /// Loaders the engine runs over `path`, rule by rule in execution order.
    pub fn loaders_for(&self, path: &Path) -> Vec<&LoaderSpec> {
        self.ordered_rules()
            .into_iter()
            .filter(|rule| rule.applies_to(path))
            .flat_map(|rule| rule.loaders.iter())
            .collect()
    }

    pub fn plugin(&self, name: &str) -> Option<&PluginDescriptor> {
        self.plugins.iter().find(|plugin| plugin.name == name)
    }

    pub fn plugin_position(&self, name: &str) -> Option<usize> {
        self.plugins.iter().position(|plugin| plugin.name == name)
    }

    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "configuration".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "configuration".to_string(),
            hint: Some(e.to_string()),
        })
    }
}

/// Partial configuration merged onto a base
///
/// Unset fields leave the base untouched. Array fields are appended to the
/// base unless listed in `replace`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConfigOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<Entry>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<ModuleRule>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<PluginDescriptor>,

    #[serde(default)]
    pub resolve: Resolution,

    #[serde(default, skip_serializing_if = "OutputOptions::is_empty")]
    pub output: OutputOptions,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<SourceMapStrategy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub externals: Option<IndexMap<String, String>>,

    /// Array fields this fragment replaces instead of appending to
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub replace: BTreeSet<ArrayField>,
}

impl ConfigOverride {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(mut self, entry: Entry) -> Self {
        self.entry = Some(entry);
        self
    }

    pub fn output(mut self, output: OutputOptions) -> Self {
        self.output = output;
        self
    }

    pub fn devtool(mut self, devtool: SourceMapStrategy) -> Self {
        self.devtool = Some(devtool);
        self
    }

    pub fn external(mut self, module: impl Into<String>, global: impl Into<String>) -> Self {
        self.externals
            .get_or_insert_with(IndexMap::new)
            .insert(module.into(), global.into());
        self
    }

    pub fn rule(mut self, rule: ModuleRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn plugin(mut self, plugin: PluginDescriptor) -> Self {
        self.plugins.push(plugin);
        self
    }

    pub fn resolve(mut self, resolve: Resolution) -> Self {
        self.resolve = resolve;
        self
    }

    /// Replace the base's `field` array wholesale when merged.
    pub fn replacing(mut self, field: ArrayField) -> Self {
        self.replace.insert(field);
        self
    }

    pub fn replaces(&self, field: ArrayField) -> bool {
        self.replace.contains(&field)
    }
}

impl From<BuildConfiguration> for ConfigOverride {
    fn from(config: BuildConfiguration) -> Self {
        Self {
            entry: config.entry,
            rules: config.rules,
            plugins: config.plugins,
            resolve: config.resolve,
            output: config.output,
            devtool: config.devtool,
            externals: config.externals,
            replace: BTreeSet::new(),
        }
    }
}
