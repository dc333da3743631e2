use crate::error::{Result, VersionManagerError};
use serde::{Deserialize, Serialize};

/// Version a manager starts from when none is supplied.
pub const DEFAULT_INITIAL_VERSION: &str = "0.0.1";

/// Returns the default starting version.
fn default_initial_version() -> String {
    DEFAULT_INITIAL_VERSION.to_string()
}

/// Construction settings for a [`VersionManager`](crate::VersionManager).
///
/// Read from TOML text; every key is optional.
///
/// ```toml
/// initial_version = "1.4.0"
/// history_limit = 32
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_initial_version")]
    pub initial_version: String,

    /// Maximum number of snapshots kept for rollback. `None` keeps all of them.
    #[serde(default)]
    pub history_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            initial_version: default_initial_version(),
            history_limit: None,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Returns
    /// * `Ok(Config)` - Parsed configuration, with defaults for missing keys
    /// * `Err` - If the text is not valid TOML or contains unknown keys
    pub fn from_toml_str(text: &str) -> Result<Config> {
        let config: Config = toml::from_str(text)?;
        Ok(config)
    }

    /// Renders the configuration back to TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| VersionManagerError::config(e.to_string()))
    }
}
