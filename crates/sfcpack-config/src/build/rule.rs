//! Module rules: match patterns, exclusion predicates and loader chains.

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::path::Path;

use crate::build::types::Enforce;
use crate::error::{ConfigError, Result};

/// Directory marker for installed third-party packages
pub const DEPENDENCY_DIR_PATTERN: &str = r"node_modules";

/// Naming convention of pre-compiled component scripts (`*.vue.js`)
pub const COMPILED_COMPONENT_PATTERN: &str = r"\.vue\.js";

/// Regular expression matched against forward-slash normalized file paths
#[derive(Clone)]
pub struct MatchPattern(Regex);

impl MatchPattern {
    pub fn new(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(MatchPattern)
            .map_err(|err| ConfigError::InvalidPattern {
                pattern: pattern.to_string(),
                message: err.to_string(),
            })
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_match(&self, path: &Path) -> bool {
        self.0.is_match(&normalize(path))
    }
}

fn normalize(path: &Path) -> Cow<'_, str> {
    let raw = path.to_string_lossy();
    if raw.contains('\\') {
        Cow::Owned(raw.replace('\\', "/"))
    } else {
        raw
    }
}

impl PartialEq for MatchPattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for MatchPattern {}

impl fmt::Debug for MatchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.as_str())
    }
}

impl Serialize for MatchPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MatchPattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        MatchPattern::new(&raw).map_err(serde::de::Error::custom)
    }
}

impl JsonSchema for MatchPattern {
    fn schema_name() -> Cow<'static, str> {
        "MatchPattern".into()
    }

    fn json_schema(_generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        schemars::json_schema!({
            "type": "string",
            "format": "regex"
        })
    }
}

/// Decides from a file path alone whether a rule skips the file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ExcludePredicate {
    /// Skip every path the pattern matches
    Pattern { pattern: MatchPattern },
    /// Skip dependency paths, except those `keep` matches
    DependenciesExcept {
        dependencies: MatchPattern,
        keep: MatchPattern,
    },
}

impl ExcludePredicate {
    /// Skip all third-party dependency code.
    pub fn dependencies() -> Result<Self> {
        Ok(ExcludePredicate::Pattern {
            pattern: MatchPattern::new(DEPENDENCY_DIR_PATTERN)?,
        })
    }

    /// Skip third-party dependency code, but keep compiled component scripts
    /// shipped inside dependencies so they still get transpiled.
    pub fn dependencies_except_compiled_components() -> Result<Self> {
        Ok(ExcludePredicate::DependenciesExcept {
            dependencies: MatchPattern::new(DEPENDENCY_DIR_PATTERN)?,
            keep: MatchPattern::new(COMPILED_COMPONENT_PATTERN)?,
        })
    }

    pub fn excludes(&self, path: &Path) -> bool {
        match self {
            ExcludePredicate::Pattern { pattern } => pattern.is_match(path),
            ExcludePredicate::DependenciesExcept { dependencies, keep } => {
                dependencies.is_match(path) && !keep.is_match(path)
            }
        }
    }
}

/// One step of a loader chain
///
/// Deserializes from either a bare loader name or `{ loader, options }`.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct LoaderSpec {
    pub loader: String,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

impl LoaderSpec {
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: Value::Null,
        }
    }

    pub fn with_options(loader: impl Into<String>, options: Value) -> Self {
        Self {
            loader: loader.into(),
            options,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LoaderRepr {
    Name(String),
    Full {
        loader: String,
        #[serde(default)]
        options: Value,
    },
}

impl<'de> Deserialize<'de> for LoaderSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(match LoaderRepr::deserialize(deserializer)? {
            LoaderRepr::Name(loader) => LoaderSpec::new(loader),
            LoaderRepr::Full { loader, options } => LoaderSpec::with_options(loader, options),
        })
    }
}

/// Module transformation rule
///
/// Loaders in `use` keep their declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ModuleRule {
    pub test: MatchPattern,

    #[serde(default, skip_serializing_if = "Enforce::is_normal")]
    pub enforce: Enforce,

    #[serde(rename = "use")]
    pub loaders: Vec<LoaderSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<ExcludePredicate>,
}

impl ModuleRule {
    pub fn new(test: &str) -> Result<Self> {
        Ok(Self {
            test: MatchPattern::new(test)?,
            enforce: Enforce::Normal,
            loaders: Vec::new(),
            exclude: None,
        })
    }

    pub fn enforce(mut self, enforce: Enforce) -> Self {
        self.enforce = enforce;
        self
    }

    pub fn loader(mut self, loader: impl Into<String>) -> Self {
        self.loaders.push(LoaderSpec::new(loader));
        self
    }

    pub fn loader_with(mut self, loader: impl Into<String>, options: Value) -> Self {
        self.loaders.push(LoaderSpec::with_options(loader, options));
        self
    }

    pub fn loaders(mut self, loaders: impl IntoIterator<Item = LoaderSpec>) -> Self {
        self.loaders.extend(loaders);
        self
    }

    pub fn exclude(mut self, predicate: ExcludePredicate) -> Self {
        self.exclude = Some(predicate);
        self
    }

    /// Whether this rule transforms `path`: the pattern matches and the
    /// exclusion predicate (if any) does not.
    pub fn applies_to(&self, path: &Path) -> bool {
        self.test.is_match(path)
            && !self
                .exclude
                .as_ref()
                .is_some_and(|predicate| predicate.excludes(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn compiled_component_inside_dependencies_is_kept() {
        let predicate = ExcludePredicate::dependencies_except_compiled_components().unwrap();

        assert!(!predicate.excludes(Path::new("node_modules/widget/dist/button.vue.js")));
        assert!(predicate.excludes(Path::new("node_modules/lodash/index.js")));
        assert!(!predicate.excludes(Path::new("src/main.js")));
    }

    #[test]
    fn windows_separators_are_normalized() {
        let predicate = ExcludePredicate::dependencies().unwrap();
        assert!(predicate.excludes(Path::new(r"C:\app\node_modules\vue\index.js")));
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let err = MatchPattern::new("(unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { .. }));
    }

    #[test]
    fn loader_accepts_shorthand_and_full_forms() {
        let loaders: Vec<LoaderSpec> = serde_json::from_value(json!([
            "css-loader",
            { "loader": "sass-loader", "options": { "indentedSyntax": true } }
        ]))
        .unwrap();

        assert_eq!(loaders[0], LoaderSpec::new("css-loader"));
        assert_eq!(loaders[1].options["indentedSyntax"], json!(true));
    }

    #[test]
    fn rule_applies_only_to_matching_unexcluded_files() {
        let rule = ModuleRule::new(r"\.js$")
            .unwrap()
            .loader("babel-loader")
            .exclude(ExcludePredicate::dependencies().unwrap());

        assert!(rule.applies_to(Path::new("src/main.js")));
        assert!(!rule.applies_to(Path::new("src/App.vue")));
        assert!(!rule.applies_to(Path::new("node_modules/vue/index.js")));
    }
}
