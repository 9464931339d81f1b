use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config::Config,
    services::player::{POSITION_MAX, RemotePlayer, VOLUME_MAX},
};

use super::utils::{connect, parse_number, service_error};

/// Slider-like value of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Output volume
    Volume,
    /// Position in the current item
    Position,
}

impl Level {
    fn name(self) -> &'static str {
        match self {
            Self::Volume => "volume",
            Self::Position => "position",
        }
    }

    fn max(self) -> i32 {
        match self {
            Self::Volume => VOLUME_MAX,
            Self::Position => POSITION_MAX,
        }
    }
}

/// Command reading, or with an argument setting, a [`Level`]
///
/// Values are passed to the player unchecked; the usual range is shown in
/// help text only.
pub struct LevelCommand {
    config: Arc<Config>,
    level: Level,
}

impl LevelCommand {
    /// Creates a command for `level`
    pub fn new(config: Arc<Config>, level: Level) -> Self {
        Self { config, level }
    }
}

#[async_trait]
impl Command for LevelCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let value = args
            .first()
            .map(|value| parse_number("value", value))
            .transpose()?;
        let player = connect(&self.config.player).await?.player();
        let name = self.level.name();

        match (self.level, value) {
            (Level::Volume, Some(value)) => {
                player.volume_set(value).await.map_err(service_error)?;
                Ok(format!("Set {name} to {value}"))
            }
            (Level::Position, Some(value)) => {
                player.position_set(value).await.map_err(service_error)?;
                Ok(format!("Set {name} to {value}"))
            }
            (Level::Volume, None) => {
                let current = player.volume_get().await.map_err(service_error)?;
                Ok(format!("{current}"))
            }
            (Level::Position, None) => {
                let current = player.position_get().await.map_err(service_error)?;
                Ok(format!("{current}"))
            }
        }
    }

    fn metadata(&self) -> CommandMetadata {
        let name = self.level.name();

        CommandMetadata {
            name: name.to_string(),
            description: format!("Get or set the {name} (usually 0-{})", self.level.max()),
            category: "player".to_string(),
            args: vec![CommandArg {
                name: "value".to_string(),
                description: format!("New {name}. Prints the current one if omitted."),
                required: false,
                value_type: ArgType::Number,
            }],
            examples: vec![
                format!("mpremote player {name}"),
                format!("mpremote player {name} {}", self.level.max() / 2),
            ],
        }
    }
}
