//! Bundle entry points.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Bundle entry points
///
/// Serializes untagged, so both `"./src/main.js"` and
/// `{ "app": "./src/main.js" }` are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Entry {
    /// A single source file; the bundler names the bundle `main`
    Path(PathBuf),
    /// Logical bundle name to source file
    Named(IndexMap<String, PathBuf>),
}

impl Entry {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Entry::Path(path.into())
    }

    pub fn named(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        let mut map = IndexMap::new();
        map.insert(name.into(), path.into());
        Entry::Named(map)
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Entry::Path(path) => path.as_os_str().is_empty(),
            Entry::Named(map) => map.is_empty(),
        }
    }

    /// Source files in declaration order.
    pub fn sources(&self) -> Vec<&Path> {
        match self {
            Entry::Path(path) => vec![path.as_path()],
            Entry::Named(map) => map.values().map(PathBuf::as_path).collect(),
        }
    }

    /// Two named maps combine key-wise; any other combination takes `other`.
    pub(crate) fn merged_with(&self, other: &Entry) -> Entry {
        match (self, other) {
            (Entry::Named(base), Entry::Named(update)) => {
                let mut merged = base.clone();
                for (name, path) in update {
                    merged.insert(name.clone(), path.clone());
                }
                Entry::Named(merged)
            }
            _ => other.clone(),
        }
    }
}
