//! Small enums shared by the configuration records.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the entry module's exports are exposed by the emitted bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LibraryTarget {
    /// `var <library> = exports` (default)
    #[default]
    Var,
    /// Assigns to an implied global, possibly an existing one
    Assign,
    /// `this[<library>] = exports`
    This,
    /// `window[<library>] = exports`
    Window,
    /// `global[<library>] = exports`
    Global,
    /// `exports[<library>] = exports`
    Commonjs,
    /// `module.exports = exports`; the library name is ignored
    Commonjs2,
    /// Asynchronous module definition
    Amd,
    /// Works under CommonJS, AMD or as a global variable
    Umd,
}

impl LibraryTarget {
    /// Whether the target needs a library name to have anywhere to put the exports.
    pub fn requires_library_name(self) -> bool {
        matches!(
            self,
            LibraryTarget::Var
                | LibraryTarget::Assign
                | LibraryTarget::This
                | LibraryTarget::Window
                | LibraryTarget::Global
                | LibraryTarget::Commonjs
        )
    }
}

/// Source map strategy handed to the bundler as `devtool`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SourceMapStrategy {
    /// Separate `.map` files referenced from the bundle
    SourceMap,
    /// Base64 map appended to the bundle
    InlineSourceMap,
    EvalSourceMap,
    CheapModuleSourceMap,
    /// Separate `.map` files without a reference comment
    HiddenSourceMap,
}

/// Rule class; `pre` rules run before normal ones, `post` rules after
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Enforce {
    Pre,
    #[default]
    Normal,
    Post,
}

impl Enforce {
    pub fn is_normal(&self) -> bool {
        matches!(self, Enforce::Normal)
    }
}

/// Array fields an override may replace wholesale instead of appending to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ArrayField {
    Rules,
    Plugins,
    Extensions,
}
