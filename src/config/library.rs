use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Media library configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct LibraryConfig {
    /// Directory the file chooser opens in.
    pub directory: PathBuf,
}

impl LibraryConfig {
    /// Returns the library directory if it exists on disk.
    ///
    /// A missing directory prints a hint on stderr and logs a degraded
    /// feature; the chooser then keeps its own default location.
    pub fn existing_directory(&self) -> Option<PathBuf> {
        if self.directory.is_dir() {
            return Some(self.directory.clone());
        }

        eprintln!(
            "media library '{}' not found, set library.directory in the config file",
            self.directory.display()
        );
        warn!(
            feature = "library",
            directory = %self.directory.display(),
            "Library directory missing, file chooser degraded to default location"
        );
        None
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("/media/mp3"),
        }
    }
}
