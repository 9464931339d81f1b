use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Object broker client configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct BrokerConfig {
    /// File holding the player's stringified object reference.
    pub ior_file: PathBuf,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            ior_file: PathBuf::from("/tmp/vlc-ior.ref"),
        }
    }
}
