use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Companion plugin of the component template compiler loader
pub const TEMPLATE_COMPILER_PLUGIN: &str = "vue-loader-plugin";

/// Extracts styles into a static stylesheet (production only)
pub const STYLE_EXTRACT_PLUGIN: &str = "mini-css-extract-plugin";

/// Loader paired with [`STYLE_EXTRACT_PLUGIN`]
pub const STYLE_EXTRACT_LOADER: &str = "mini-css-extract-plugin/loader";

/// Emits an HTML document referencing the produced bundles
pub const HTML_PAGE_PLUGIN: &str = "html-webpack-plugin";

/// Opaque plugin handed to the bundling engine
///
/// Registration order is significant; the engine runs plugins in the order
/// they appear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PluginDescriptor {
    pub name: String,

    /// Plugin-specific configuration forwarded verbatim
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

impl PluginDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Value::Null,
        }
    }

    pub fn with_options(name: impl Into<String>, options: Value) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }

    pub fn template_compiler() -> Self {
        Self::new(TEMPLATE_COMPILER_PLUGIN)
    }

    pub fn style_extraction(filename: &str) -> Self {
        Self::with_options(
            STYLE_EXTRACT_PLUGIN,
            serde_json::json!({ "filename": filename }),
        )
    }

    pub fn html_page(page: &PageOptions) -> Self {
        Self::with_options(
            HTML_PAGE_PLUGIN,
            serde_json::to_value(page).unwrap_or(Value::Null),
        )
    }
}

/// Page generator payload: document title and `<meta>` tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PageOptions {
    pub title: String,

    #[serde(default)]
    pub meta: IndexMap<String, MetaTag>,
}

/// A `<meta>` tag, either `name` + `content` or an explicit attribute set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum MetaTag {
    Content(String),
    Attributes(IndexMap<String, String>),
}

impl Default for PageOptions {
    fn default() -> Self {
        let mut meta = IndexMap::new();
        meta.insert(
            "viewport".to_string(),
            MetaTag::Content("width=device-width, initial-scale=1, shrink-to-fit=no".to_string()),
        );
        Self {
            title: "Vue.js webpack .vue".to_string(),
            meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn html_page_payload_carries_title_and_meta() {
        let mut page = PageOptions::default();
        let mut cookie = IndexMap::new();
        cookie.insert("http-equiv".to_string(), "set-cookie".to_string());
        cookie.insert("content".to_string(), "name=value; path=/".to_string());
        page.meta
            .insert("set-cookie".to_string(), MetaTag::Attributes(cookie));

        let plugin = PluginDescriptor::html_page(&page);
        assert_eq!(plugin.name, HTML_PAGE_PLUGIN);
        assert_eq!(plugin.options["title"], json!("Vue.js webpack .vue"));
        assert_eq!(
            plugin.options["meta"]["set-cookie"]["http-equiv"],
            json!("set-cookie")
        );
    }

    #[test]
    fn options_are_omitted_when_empty() {
        let value = serde_json::to_value(PluginDescriptor::template_compiler()).unwrap();
        assert_eq!(value, json!({ "name": "vue-loader-plugin" }));
    }
}
