use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Controller window configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Window title.
    pub title: String,

    /// Icon theme name used for the window and the tray item.
    pub icon_name: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "VLC - D-Bus ctrl".to_string(),
            icon_name: "vlc".to_string(),
        }
    }
}
