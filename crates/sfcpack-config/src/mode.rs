//! Build mode selection.
//!
//! A [`Mode`] is parsed once at process entry and passed explicitly to the
//! assembler. There is no catch-all variant: anything that does not name one
//! of the three modes is rejected by [`Mode::parse`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Environment variable consulted when no mode is given explicitly.
pub const MODE_ENV_VAR: &str = "NODE_ENV";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Single app bundle with an HTML page and runtime style injection
    Development,
    /// Production build whose primary artifact is the UMD library bundle
    ProductionLibrary,
    /// Production build whose primary artifact is the window-global bundle
    ProductionWindow,
}

impl Mode {
    pub const ALL: [Mode; 3] = [
        Mode::Development,
        Mode::ProductionLibrary,
        Mode::ProductionWindow,
    ];

    /// Parse a raw mode value.
    ///
    /// `dev` and `prod` are the short forms used in `NODE_ENV`; `prod` selects
    /// [`Mode::ProductionLibrary`]. Matching ignores surrounding whitespace
    /// and ASCII case.
    ///
    /// ```
    /// use sfcpack_config::Mode;
    ///
    /// assert_eq!(Mode::parse("dev").unwrap(), Mode::Development);
    /// assert_eq!(Mode::parse("prod").unwrap(), Mode::ProductionLibrary);
    /// assert!(Mode::parse("staging").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "dev" | "development" => Ok(Mode::Development),
            "prod" | "production" | "production-library" => Ok(Mode::ProductionLibrary),
            "production-window" => Ok(Mode::ProductionWindow),
            _ => Err(ConfigError::UnrecognizedMode {
                value: raw.to_string(),
            }),
        }
    }

    /// Parse an optional raw value, treating unset the same as unrecognized.
    pub fn parse_optional(raw: Option<&str>) -> Result<Self> {
        match raw {
            Some(value) => Self::parse(value),
            None => Err(ConfigError::UnrecognizedMode {
                value: String::new(),
            }),
        }
    }

    pub fn is_production(self) -> bool {
        !matches!(self, Mode::Development)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::ProductionLibrary => "production-library",
            Mode::ProductionWindow => "production-window",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
