//! Configuration schema definitions and loading.
//!
//! Defines the configuration structure for mpremote: logging, the remote
//! player connection, the media library, the controller window and the
//! broker client. All sections are serializable to/from TOML format and
//! fall back to defaults when omitted.

mod broker;
mod general;
mod library;
mod loading;
mod paths;
mod player;
mod ui;

#[cfg(test)]
mod tests;

pub use broker::BrokerConfig;
pub use general::{GeneralConfig, LogLevel};
pub use library::LibraryConfig;
pub use paths::ConfigPaths;
pub use player::PlayerConfig;
pub use ui::UiConfig;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Main configuration structure for mpremote.
///
/// Represents the complete configuration schema that can be loaded
/// from TOML files. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Remote player connection settings.
    #[serde(default)]
    pub player: PlayerConfig,

    /// Local media library settings.
    #[serde(default)]
    pub library: LibraryConfig,

    /// Controller window settings.
    #[serde(default)]
    pub ui: UiConfig,

    /// Object broker client settings.
    #[serde(default)]
    pub broker: BrokerConfig,
}
