use std::{fs, path::Path};

use tracing::{debug, instrument};

use super::{Config, ConfigPaths};
use crate::{MpRemoteError, Result};

impl Config {
    /// Loads the configuration from the main config file.
    ///
    /// A missing file is not an error: defaults are returned instead.
    ///
    /// # Errors
    /// Returns error if the config directory cannot be resolved, or if the
    /// file exists but cannot be read or parsed.
    #[instrument]
    pub fn load() -> Result<Self> {
        let path = ConfigPaths::main_config()?;

        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Loads the configuration from a specific TOML file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not valid configuration.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| MpRemoteError::io(e, path))?;

        let config = toml::from_str(&content).map_err(|e| MpRemoteError::toml_parse(e, Some(path)))?;
        debug!("Loaded config from {}", path.display());

        Ok(config)
    }

    /// Parses configuration from an in-memory TOML string.
    ///
    /// # Errors
    /// Returns error if the string is not valid configuration.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| MpRemoteError::toml_parse(e, None))
    }

    /// Serializes the configuration back to TOML.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| MpRemoteError::toml_parse(e, None))
    }
}
