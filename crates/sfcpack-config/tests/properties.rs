//! Property-based tests for merging and assembly.

use proptest::prelude::*;
use sfcpack_config::{
    assemble_project, merge, merge_all, ArrayField, BuildConfiguration, ConfigOverride, Enforce,
    Mode, ModuleRule, PluginDescriptor, ProjectSettings,
};

fn plugin_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z][a-z-]{0,12}", 0..6)
}

fn enforce() -> impl Strategy<Value = Enforce> {
    prop_oneof![Just(Enforce::Pre), Just(Enforce::Normal), Just(Enforce::Post)]
}

fn base_with(plugins: &[String]) -> BuildConfiguration {
    BuildConfiguration {
        plugins: plugins.iter().map(PluginDescriptor::new).collect(),
        ..Default::default()
    }
}

fn override_with(plugins: &[String]) -> ConfigOverride {
    plugins
        .iter()
        .fold(ConfigOverride::new(), |update, name| update.plugin(PluginDescriptor::new(name)))
}

proptest! {
    #[test]
    fn merged_plugins_are_base_then_override(base in plugin_names(), extra in plugin_names()) {
        let merged = merge(&base_with(&base), &override_with(&extra));

        let names: Vec<String> = merged.plugins.into_iter().map(|p| p.name).collect();
        let expected: Vec<String> = base.iter().chain(extra.iter()).cloned().collect();
        prop_assert_eq!(names, expected);
    }

    #[test]
    fn replaced_plugins_are_exactly_the_override(base in plugin_names(), extra in plugin_names()) {
        let update = override_with(&extra).replacing(ArrayField::Plugins);
        let merged = merge(&base_with(&base), &update);

        let names: Vec<String> = merged.plugins.into_iter().map(|p| p.name).collect();
        prop_assert_eq!(names, extra);
    }

    #[test]
    fn empty_override_is_identity(base in plugin_names()) {
        let config = base_with(&base);
        prop_assert_eq!(merge(&config, &ConfigOverride::new()), config);
    }

    #[test]
    fn merge_all_matches_sequential_merges(a in plugin_names(), b in plugin_names(), c in plugin_names()) {
        let base = base_with(&a);
        let (first, second) = (override_with(&b), override_with(&c));

        let folded = merge_all(&base, [&first, &second]);
        prop_assert_eq!(folded, merge(&merge(&base, &first), &second));
    }

    #[test]
    fn ordered_rules_group_by_enforcement(levels in prop::collection::vec(enforce(), 0..10)) {
        let config = BuildConfiguration {
            rules: levels
                .iter()
                .enumerate()
                .map(|(i, level)| {
                    ModuleRule::new(&format!(r"\.ext{i}$"))
                        .unwrap()
                        .enforce(*level)
                        .loader(format!("loader-{i}"))
                })
                .collect(),
            ..Default::default()
        };

        let ordered = config.ordered_rules();
        prop_assert_eq!(ordered.len(), levels.len());
        prop_assert!(ordered.windows(2).all(|pair| pair[0].enforce <= pair[1].enforce));
    }

    #[test]
    fn any_identifier_library_name_assembles(name in "[A-Za-z_$][A-Za-z0-9_$]{0,16}") {
        let settings = ProjectSettings {
            library_name: name.clone(),
            window_global: name.clone(),
            ..Default::default()
        };

        for mode in [Mode::ProductionLibrary, Mode::ProductionWindow] {
            let configs = assemble_project(mode, &settings).unwrap();
            prop_assert_eq!(configs.len(), 2);
            prop_assert_eq!(configs[0].output.library.as_deref(), Some(name.as_str()));
        }
    }
}
