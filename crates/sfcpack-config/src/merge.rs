//! Structural merge of override fragments onto a base configuration.
//!
//! | field            | strategy                                            |
//! |------------------|-----------------------------------------------------|
//! | `entry`          | named maps combine key-wise, otherwise replace      |
//! | `rules`          | append, or replace when flagged                     |
//! | `plugins`        | append, or replace when flagged                     |
//! | `resolve.alias`  | key-wise, override wins                             |
//! | `resolve.extensions` | append, or replace when flagged                 |
//! | `output`         | field-wise, set fields replace                      |
//! | `devtool`        | replace when set                                    |
//! | `externals`      | key-wise, override wins                             |

use crate::build::{ArrayField, BuildConfiguration, ConfigOverride};

/// Merge `update` onto `base`, returning a new configuration.
///
/// Neither input is modified.
///
/// ```
/// use sfcpack_config::{merge, BuildConfiguration, ConfigOverride, PluginDescriptor};
///
/// let base = BuildConfiguration {
///     plugins: vec![PluginDescriptor::new("first")],
///     ..Default::default()
/// };
/// let merged = merge(&base, &ConfigOverride::new().plugin(PluginDescriptor::new("second")));
///
/// let names: Vec<&str> = merged.plugins.iter().map(|p| p.name.as_str()).collect();
/// assert_eq!(names, ["first", "second"]);
/// ```
pub fn merge(base: &BuildConfiguration, update: &ConfigOverride) -> BuildConfiguration {
    let entry = match (&base.entry, &update.entry) {
        (Some(current), Some(next)) => Some(current.merged_with(next)),
        (None, Some(next)) => Some(next.clone()),
        (current, None) => current.clone(),
    };

    let externals = match (&base.externals, &update.externals) {
        (Some(current), Some(next)) => {
            let mut merged = current.clone();
            for (module, global) in next {
                merged.insert(module.clone(), global.clone());
            }
            Some(merged)
        }
        (None, Some(next)) => Some(next.clone()),
        (current, None) => current.clone(),
    };

    let merged = BuildConfiguration {
        entry,
        rules: combine(&base.rules, &update.rules, update.replaces(ArrayField::Rules)),
        plugins: combine(
            &base.plugins,
            &update.plugins,
            update.replaces(ArrayField::Plugins),
        ),
        resolve: base
            .resolve
            .merged_with(&update.resolve, update.replaces(ArrayField::Extensions)),
        output: base.output.merged_with(&update.output),
        devtool: update.devtool.or(base.devtool),
        externals,
    };

    tracing::debug!(
        rules = merged.rules.len(),
        plugins = merged.plugins.len(),
        replaced = ?update.replace,
        "merged configuration override"
    );

    merged
}

/// Apply `fragments` left to right.
pub fn merge_all<'a>(
    base: &BuildConfiguration,
    fragments: impl IntoIterator<Item = &'a ConfigOverride>,
) -> BuildConfiguration {
    fragments
        .into_iter()
        .fold(base.clone(), |acc, fragment| merge(&acc, fragment))
}

fn combine<T: Clone>(base: &[T], update: &[T], replace: bool) -> Vec<T> {
    if replace {
        return update.to_vec();
    }
    base.iter().chain(update.iter()).cloned().collect()
}
