use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Well-known bus name exported by the player's D-Bus control module.
pub const DEFAULT_BUS_NAME: &str = "org.freedesktop.MediaPlayer";

/// Remote player connection configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// D-Bus name the player owns on the session bus.
    pub bus_name: String,

    /// Interval between position refreshes while playing, in milliseconds.
    pub refresh_interval_ms: u64,
}

impl PlayerConfig {
    /// Position refresh interval as a `Duration`.
    ///
    /// A zero interval is bumped to one millisecond so the timer never spins.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms.max(1))
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            bus_name: DEFAULT_BUS_NAME.to_string(),
            refresh_interval_ms: 2000,
        }
    }
}
