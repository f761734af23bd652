//! Tests for mode-driven assembly of the project configurations.

use indexmap::IndexMap;
use sfcpack_config::{
    assemble, assemble_project, base_configuration, project_overrides, validate_schema,
    BuildConfiguration, Entry, LibraryTarget, Mode, ProjectSettings, SourceMapStrategy,
};
use std::path::{Path, PathBuf};

fn settings() -> ProjectSettings {
    ProjectSettings {
        root: PathBuf::from("/work/widget"),
        ..Default::default()
    }
}

fn vue_external() -> IndexMap<String, String> {
    [("vue".to_string(), "vue".to_string())].into_iter().collect()
}

#[test]
fn development_produces_exactly_the_base() {
    let settings = settings();
    let base = base_configuration(&settings, Mode::Development).expect("base");

    let configs = assemble(Mode::Development, &base, &project_overrides(&settings));

    assert_eq!(configs.len(), 1);
    assert_eq!(configs[0], base);
    assert_eq!(configs[0].devtool, None);
    assert_eq!(configs[0].externals, None);
}

#[test]
fn every_production_mode_produces_two_targets() {
    for mode in [Mode::ProductionLibrary, Mode::ProductionWindow] {
        let configs = assemble_project(mode, &settings()).expect("assemble");
        assert_eq!(configs.len(), 2, "mode {mode}");
    }
}

#[test]
fn production_library_targets() {
    let configs = assemble_project(Mode::ProductionLibrary, &settings()).expect("assemble");

    let library = &configs[0];
    assert_eq!(library.output.library_target, Some(LibraryTarget::Umd));
    assert_eq!(library.output.library.as_deref(), Some("test"));
    assert_eq!(library.output.umd_named_define, Some(true));
    assert_eq!(library.output.filename.as_deref(), Some("[hash].js"));
    assert_eq!(library.entry, Some(Entry::path("./src/components/test.vue")));

    let window = &configs[1];
    assert_eq!(window.output.library_target, Some(LibraryTarget::Window));
    assert_eq!(window.output.library.as_deref(), Some("AaaTest"));
    assert_eq!(window.output.umd_named_define, None);
    assert_eq!(window.output.filename.as_deref(), Some("[hash].min.js"));

    for config in &configs {
        assert_eq!(config.devtool, Some(SourceMapStrategy::SourceMap));
        assert_eq!(config.externals, Some(vue_external()));
        assert_eq!(config.output.path, Some(PathBuf::from("/work/widget/dist")));
    }
}

#[test]
fn production_targets_share_everything_but_entry_output_devtool_externals() {
    let configs = assemble_project(Mode::ProductionWindow, &settings()).expect("assemble");
    let base = base_configuration(&settings(), Mode::ProductionWindow).expect("base");

    let strip = |config: &BuildConfiguration| BuildConfiguration {
        entry: None,
        output: Default::default(),
        devtool: None,
        externals: None,
        ..config.clone()
    };

    assert_eq!(strip(&configs[0]), strip(&base));
    assert_eq!(strip(&configs[1]), strip(&base));
}

#[test]
fn assembly_leaves_inputs_untouched() {
    let settings = settings();
    let base = base_configuration(&settings, Mode::ProductionLibrary).expect("base");
    let overrides = project_overrides(&settings);
    let snapshot = (base.clone(), overrides.clone());

    let _ = assemble(Mode::ProductionLibrary, &base, &overrides);

    assert_eq!((base, overrides), snapshot);
}

#[test]
fn assembled_targets_pass_schema_validation() {
    for mode in Mode::ALL {
        for config in assemble_project(mode, &settings()).expect("assemble") {
            validate_schema(&config).expect("valid configuration");
        }
    }
}

#[test]
fn lint_rule_stays_first_after_merging() {
    for config in assemble_project(Mode::ProductionLibrary, &settings()).expect("assemble") {
        let loaders = config.loaders_for(Path::new("src/build.js"));
        assert_eq!(loaders[0].loader, "eslint-loader");
    }
}

#[test]
fn serialized_targets_use_engine_field_names() {
    let configs = assemble_project(Mode::ProductionLibrary, &settings()).expect("assemble");
    let value = serde_json::to_value(&configs).expect("serialize");

    assert_eq!(value[0]["output"]["libraryTarget"], "umd");
    assert_eq!(value[0]["devtool"], "source-map");
    assert_eq!(value[0]["externals"]["vue"], "vue");
    assert_eq!(value[0]["resolve"]["alias"]["vue$"], "vue/dist/vue.esm.js");
    assert_eq!(value[0]["rules"][0]["enforce"], "pre");
    assert_eq!(value[1]["output"]["library"], "AaaTest");
}
