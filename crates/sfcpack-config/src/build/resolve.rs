//! Module resolution rules and a small resolver that applies them.
//!
//! The resolver mirrors how the bundling engine interprets the `resolve`
//! block, so that the CLI can answer "which file does this import hit?"
//! without running the engine. Package manifests (`package.json` `main`
//! fields) are not consulted.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Extensions the engine tries when a configuration sets none
pub const DEFAULT_EXTENSIONS: &[&str] = &[".js", ".json"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Resolution {
    /// Module id pattern to replacement. A trailing `$` matches the request
    /// exactly; otherwise the key also matches `key/...` sub-paths.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub alias: IndexMap<String, String>,

    /// Tried in order when an import names no extension
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<String>,
}

/// Filesystem queries the resolver needs
pub trait FileProbe {
    fn is_file(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
}

/// [`FileProbe`] backed by the real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileProbe;

impl FileProbe for StdFileProbe {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

impl Resolution {
    pub fn with_alias(mut self, pattern: impl Into<String>, target: impl Into<String>) -> Self {
        self.alias.insert(pattern.into(), target.into());
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions.extend(extensions.into_iter().map(Into::into));
        self
    }

    /// Configured extensions, or the engine defaults when none are set.
    pub fn effective_extensions(&self) -> Vec<&str> {
        if self.extensions.is_empty() {
            DEFAULT_EXTENSIONS.to_vec()
        } else {
            self.extensions.iter().map(String::as_str).collect()
        }
    }

    /// Rewrite `request` through the first matching alias.
    pub fn apply_alias<'a>(&self, request: &'a str) -> Cow<'a, str> {
        for (pattern, target) in &self.alias {
            if let Some(exact) = pattern.strip_suffix('$') {
                if request == exact {
                    return Cow::Owned(target.clone());
                }
                continue;
            }

            if request == pattern {
                return Cow::Owned(target.clone());
            }
            if let Some(rest) = request.strip_prefix(pattern.as_str()) {
                if rest.starts_with('/') {
                    return Cow::Owned(format!("{target}{rest}"));
                }
            }
        }
        Cow::Borrowed(request)
    }

    /// Resolve an import the way the bundler would.
    ///
    /// Relative and absolute requests are joined onto `from_dir`; bare module
    /// ids are looked up in `node_modules` of `from_dir` and its ancestors.
    /// For each candidate an exact file wins, then each extension in order,
    /// then `index<ext>` inside a directory.
    pub fn resolve(
        &self,
        request: &str,
        from_dir: &Path,
        probe: &impl FileProbe,
    ) -> Result<PathBuf> {
        let aliased = self.apply_alias(request);
        let extensions = self.effective_extensions();

        for candidate in candidates(&aliased, from_dir) {
            if let Some(found) = try_candidate(&candidate, &extensions, probe) {
                tracing::debug!(request, resolved = %found.display(), "resolved import");
                return Ok(found);
            }
        }

        Err(ConfigError::Unresolved {
            request: request.to_string(),
            from: from_dir.to_path_buf(),
        })
    }

    pub(crate) fn merged_with(&self, other: &Resolution, replace_extensions: bool) -> Resolution {
        let mut alias = self.alias.clone();
        for (pattern, target) in &other.alias {
            alias.insert(pattern.clone(), target.clone());
        }

        let extensions = if replace_extensions {
            other.extensions.clone()
        } else {
            self.extensions
                .iter()
                .chain(other.extensions.iter())
                .cloned()
                .collect()
        };

        Resolution { alias, extensions }
    }
}

fn is_path_request(request: &str) -> bool {
    request.starts_with("./")
        || request.starts_with("../")
        || request == "."
        || request == ".."
        || Path::new(request).is_absolute()
}

fn candidates(request: &str, from_dir: &Path) -> Vec<PathBuf> {
    if is_path_request(request) {
        return vec![path_clean::clean(from_dir.join(request))];
    }

    from_dir
        .ancestors()
        .map(|dir| path_clean::clean(dir.join("node_modules").join(request)))
        .collect()
}

fn try_candidate(base: &Path, extensions: &[&str], probe: &impl FileProbe) -> Option<PathBuf> {
    if probe.is_file(base) {
        return Some(base.to_path_buf());
    }

    for ext in extensions {
        let with_ext = append_extension(base, ext);
        if probe.is_file(&with_ext) {
            return Some(with_ext);
        }
    }

    if probe.is_dir(base) {
        for ext in extensions {
            let index = base.join(format!("index{ext}"));
            if probe.is_file(&index) {
                return Some(index);
            }
        }
    }

    None
}

fn append_extension(base: &Path, ext: &str) -> PathBuf {
    let mut raw: OsString = base.as_os_str().to_owned();
    raw.push(ext);
    PathBuf::from(raw)
}
