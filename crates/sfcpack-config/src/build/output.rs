use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::build::types::LibraryTarget;

/// Placeholders the bundler substitutes in output filenames
///
/// - `[hash]` module identifier hash
/// - `[chunkhash]` hash of the chunk contents
/// - `[name]` bundle name
/// - `[id]` module identifier
/// - `[query]` module query string
pub const FILENAME_PLACEHOLDERS: &[&str] = &["hash", "chunkhash", "name", "id", "query"];

/// Output target of one build
///
/// Every field is optional so that override fragments can set a subset;
/// merging replaces field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Filename pattern, e.g. `[hash].js`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_target: Option<LibraryTarget>,

    /// Name the exports are published under; meaning depends on `library_target`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,

    /// Name the AMD module of a UMD build
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub umd_named_define: Option<bool>,
}

impl OutputOptions {
    pub fn is_empty(&self) -> bool {
        self == &OutputOptions::default()
    }

    pub(crate) fn merged_with(&self, other: &OutputOptions) -> OutputOptions {
        OutputOptions {
            path: other.path.clone().or_else(|| self.path.clone()),
            filename: other.filename.clone().or_else(|| self.filename.clone()),
            library_target: other.library_target.or(self.library_target),
            library: other.library.clone().or_else(|| self.library.clone()),
            umd_named_define: other.umd_named_define.or(self.umd_named_define),
        }
    }
}

/// Placeholders in `pattern` that the bundler would not substitute.
///
/// `[hash]` and `[chunkhash]` may carry a length, as in `[hash:8]`.
pub fn unknown_placeholders(pattern: &str) -> Vec<String> {
    let mut unknown = Vec::new();
    let mut rest = pattern;
    while let Some(start) = rest.find('[') {
        let after = &rest[start + 1..];
        let Some(end) = after.find(']') else {
            break;
        };
        let token = &after[..end];
        if !is_known_placeholder(token) {
            unknown.push(token.to_string());
        }
        rest = &after[end + 1..];
    }
    unknown
}

fn is_known_placeholder(token: &str) -> bool {
    match token.split_once(':') {
        Some((name, len)) => {
            matches!(name, "hash" | "chunkhash")
                && !len.is_empty()
                && len.bytes().all(|b| b.is_ascii_digit())
        }
        None => FILENAME_PLACEHOLDERS.contains(&token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_replaces_only_set_fields() {
        let base = OutputOptions {
            path: Some(PathBuf::from("dist")),
            filename: Some("[name].js".to_string()),
            ..Default::default()
        };
        let update = OutputOptions {
            filename: Some("[hash].js".to_string()),
            library_target: Some(LibraryTarget::Umd),
            ..Default::default()
        };

        let merged = base.merged_with(&update);
        assert_eq!(merged.path, Some(PathBuf::from("dist")));
        assert_eq!(merged.filename.as_deref(), Some("[hash].js"));
        assert_eq!(merged.library_target, Some(LibraryTarget::Umd));
    }

    #[test]
    fn recognizes_placeholders() {
        assert!(unknown_placeholders("[hash].min.js").is_empty());
        assert!(unknown_placeholders("[name].[chunkhash:8].js").is_empty());
        assert_eq!(unknown_placeholders("[contenthash].js"), vec!["contenthash"]);
        assert_eq!(unknown_placeholders("[name:3].js"), vec!["name:3"]);
    }

    #[test]
    fn serializes_camel_case() {
        let output = OutputOptions {
            library_target: Some(LibraryTarget::Umd),
            umd_named_define: Some(true),
            ..Default::default()
        };
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["libraryTarget"], "umd");
        assert_eq!(value["umdNamedDefine"], true);
        assert!(value.get("path").is_none());
    }
}
