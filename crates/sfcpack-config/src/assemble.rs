//! Mode-driven assembly of build configurations.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::build::{BuildConfiguration, ConfigOverride};
use crate::merge::merge;
use crate::mode::{Mode, MODE_ENV_VAR};

/// Override fragments for one mode
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModeOverrides {
    /// Merged onto the base before any variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared: Option<ConfigOverride>,

    /// One output configuration per variant, in order
    #[serde(default)]
    pub variants: Vec<ConfigOverride>,
}

/// Override fragments keyed by mode
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverrideTable {
    #[serde(default)]
    modes: IndexMap<Mode, ModeOverrides>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: Mode, overrides: ModeOverrides) -> Self {
        self.modes.insert(mode, overrides);
        self
    }

    pub fn get(&self, mode: Mode) -> Option<&ModeOverrides> {
        self.modes.get(&mode)
    }
}

/// Assemble the configurations a mode produces.
///
/// Development yields exactly the base, untouched. Production modes merge the
/// mode's shared fragment onto the base and then produce one configuration
/// per variant; with no variants the shared result is the only output.
pub fn assemble(
    mode: Mode,
    base: &BuildConfiguration,
    overrides: &OverrideTable,
) -> Vec<BuildConfiguration> {
    if !mode.is_production() {
        if overrides.get(mode).is_some() {
            tracing::debug!(%mode, "ignoring overrides registered for development");
        }
        tracing::debug!(%mode, "assembled 1 configuration");
        return vec![base.clone()];
    }

    let Some(mode_overrides) = overrides.get(mode) else {
        tracing::debug!(%mode, "no overrides registered, emitting base");
        return vec![base.clone()];
    };

    let shared = match &mode_overrides.shared {
        Some(fragment) => merge(base, fragment),
        None => base.clone(),
    };

    if mode_overrides.variants.is_empty() {
        return vec![shared];
    }

    let configs: Vec<BuildConfiguration> = mode_overrides
        .variants
        .iter()
        .map(|variant| merge(&shared, variant))
        .collect();

    tracing::debug!(%mode, count = configs.len(), "assembled configurations");
    configs
}

/// Assemble from a raw environment value such as `NODE_ENV`.
///
/// An unset or unrecognized value produces no configuration and logs a
/// warning; it is never an error.
pub fn assemble_from_env(
    raw: Option<&str>,
    base: &BuildConfiguration,
    overrides: &OverrideTable,
) -> Vec<BuildConfiguration> {
    match Mode::parse_optional(raw) {
        Ok(mode) => assemble(mode, base, overrides),
        Err(_) => {
            warn_unrecognized_mode(raw);
            Vec::new()
        }
    }
}

pub(crate) fn warn_unrecognized_mode(raw: Option<&str>) {
    tracing::warn!(
        variable = MODE_ENV_VAR,
        value = raw.unwrap_or("<unset>"),
        "unrecognized build mode, no configuration produced"
    );
}
