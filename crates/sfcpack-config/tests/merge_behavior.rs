//! Tests for the per-field strategy of configuration merging.

use sfcpack_config::{
    merge, ArrayField, BuildConfiguration, ConfigOverride, Enforce, Entry, ModuleRule,
    PluginDescriptor, Resolution,
};
use std::path::Path;

fn names(plugins: &[PluginDescriptor]) -> Vec<&str> {
    plugins.iter().map(|p| p.name.as_str()).collect()
}

fn base() -> BuildConfiguration {
    BuildConfiguration {
        entry: Some(Entry::named("app", "./src/build.js")),
        rules: vec![ModuleRule::new(r"\.js$").unwrap().loader("babel-loader")],
        plugins: vec![PluginDescriptor::new("a"), PluginDescriptor::new("b")],
        resolve: Resolution::default()
            .with_alias("vue$", "vue/dist/vue.esm.js")
            .with_extensions([".vue", ".js"]),
        ..Default::default()
    }
}

#[test]
fn merge_appends_plugins_after_base() {
    let update = ConfigOverride::new().plugin(PluginDescriptor::new("c"));

    let merged = merge(&base(), &update);
    assert_eq!(names(&merged.plugins), ["a", "b", "c"]);
}

#[test]
fn merge_appends_rules_after_base() {
    let update = ConfigOverride::new().rule(ModuleRule::new(r"\.ts$").unwrap().loader("ts-loader"));

    let merged = merge(&base(), &update);
    assert_eq!(merged.rules.len(), 2);
    assert_eq!(merged.rules[0].loaders[0].loader, "babel-loader");
    assert_eq!(merged.rules[1].loaders[0].loader, "ts-loader");
}

#[test]
fn merge_replaces_rules_when_flagged() {
    let update = ConfigOverride::new()
        .rule(ModuleRule::new(r"\.ts$").unwrap().loader("ts-loader"))
        .replacing(ArrayField::Rules);

    let merged = merge(&base(), &update);
    assert_eq!(merged.rules.len(), 1);
    assert_eq!(merged.rules[0].loaders[0].loader, "ts-loader");
    // Other arrays keep appending.
    assert_eq!(names(&merged.plugins), ["a", "b"]);
}

#[test]
fn merge_combines_resolution() {
    let update = ConfigOverride::new().resolve(
        Resolution::default()
            .with_alias("@", "./src")
            .with_extensions([".json"]),
    );

    let merged = merge(&base(), &update);
    assert_eq!(merged.resolve.alias.len(), 2);
    assert_eq!(merged.resolve.extensions, [".vue", ".js", ".json"]);
}

#[test]
fn merge_replaces_extensions_when_flagged() {
    let update = ConfigOverride::new()
        .resolve(Resolution::default().with_extensions([".ts"]))
        .replacing(ArrayField::Extensions);

    let merged = merge(&base(), &update);
    assert_eq!(merged.resolve.extensions, [".ts"]);
    assert_eq!(merged.resolve.alias["vue$"], "vue/dist/vue.esm.js");
}

#[test]
fn merge_replaces_named_entry_with_single_path() {
    let update = ConfigOverride::new().entry(Entry::path("./src/components/test.vue"));

    let merged = merge(&base(), &update);
    assert_eq!(merged.entry, Some(Entry::path("./src/components/test.vue")));
}

#[test]
fn merge_never_mutates_inputs() {
    let base = base();
    let update = ConfigOverride::new()
        .plugin(PluginDescriptor::new("c"))
        .external("vue", "vue");
    let (base_before, update_before) = (base.clone(), update.clone());

    let _ = merge(&base, &update);

    assert_eq!(base, base_before);
    assert_eq!(update, update_before);
}

#[test]
fn pre_rule_appended_by_override_still_runs_first() {
    let update = ConfigOverride::new().rule(
        ModuleRule::new(r"\.js$")
            .unwrap()
            .enforce(Enforce::Pre)
            .loader("eslint-loader"),
    );

    let merged = merge(&base(), &update);
    let loaders: Vec<&str> = merged
        .loaders_for(Path::new("src/main.js"))
        .into_iter()
        .map(|spec| spec.loader.as_str())
        .collect();
    assert_eq!(loaders, ["eslint-loader", "babel-loader"]);
}

#[test]
fn override_fragments_deserialize_with_replace_flags() {
    let update: ConfigOverride = serde_json::from_value(serde_json::json!({
        "plugins": [{ "name": "only" }],
        "replace": ["plugins"]
    }))
    .expect("parse override");

    let merged = merge(&base(), &update);
    assert_eq!(names(&merged.plugins), ["only"]);
}
