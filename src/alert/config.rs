use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::MsError;

/// Alert when `symbol` closes at or above `threshold`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRule {
    pub symbol: String,
    pub threshold: f64,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

const fn enabled_by_default() -> bool {
    true
}

impl AlertRule {
    pub fn new(symbol: impl Into<String>, threshold: f64) -> Self {
        Self {
            symbol: symbol.into(),
            threshold,
            enabled: true,
        }
    }

    #[must_use]
    pub const fn enabled(mut self, yes: bool) -> Self {
        self.enabled = yes;
        self
    }
}

/// The set of alert rules, usually read once at start-up.
///
/// ```toml
/// [[rule]]
/// symbol = "GLDM"
/// threshold = 52.5
///
/// [[rule]]
/// symbol = "SIVR"
/// threshold = 31.0
/// enabled = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertConfig {
    #[serde(default, rename = "rule")]
    pub rules: Vec<AlertRule>,
}

impl AlertConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`MsError::Config`] if the document is not valid alert configuration.
    pub fn from_toml_str(s: &str) -> Result<Self, MsError> {
        toml::from_str(s).map_err(|e| MsError::Config(format!("invalid alert config: {e}")))
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`MsError::Config`] if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MsError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| MsError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Rules that are switched on.
    pub fn enabled_rules(&self) -> impl Iterator<Item = &AlertRule> {
        self.rules.iter().filter(|r| r.enabled)
    }
}
