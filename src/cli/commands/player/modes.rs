use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config::Config,
    services::player::RemoteTrackList,
};

use super::utils::{connect, parse_switch, service_error};

/// Playlist playback mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Restart the playlist after the last item
    Loop,
    /// Repeat the current item
    Repeat,
    /// Play items in random order
    Random,
}

impl Mode {
    /// All modes, in help order.
    pub const ALL: [Self; 3] = [Self::Loop, Self::Repeat, Self::Random];

    fn name(self) -> &'static str {
        match self {
            Self::Loop => "loop",
            Self::Repeat => "repeat",
            Self::Random => "random",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Loop => "Loop over the playlist",
            Self::Repeat => "Repeat the current item",
            Self::Random => "Play the playlist in random order",
        }
    }
}

/// Command switching a playlist [`Mode`]
pub struct ModeCommand {
    config: Arc<Config>,
    mode: Mode,
}

impl ModeCommand {
    /// Creates a command for `mode`
    pub fn new(config: Arc<Config>, mode: Mode) -> Self {
        Self { config, mode }
    }
}

#[async_trait]
impl Command for ModeCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let enabled = parse_switch("state", args.first().map(String::as_str).unwrap_or_default())?;
        let tracklist = connect(&self.config.player).await?.tracklist();

        match self.mode {
            Mode::Loop => tracklist.set_loop(enabled).await,
            Mode::Repeat => tracklist.set_repeat(enabled).await,
            Mode::Random => tracklist.set_random(enabled).await,
        }
        .map_err(service_error)?;

        let state = if enabled { "on" } else { "off" };
        Ok(format!("{} {state}", self.mode.name()))
    }

    fn metadata(&self) -> CommandMetadata {
        let name = self.mode.name();

        CommandMetadata {
            name: name.to_string(),
            description: self.mode.description().to_string(),
            category: "player".to_string(),
            args: vec![CommandArg {
                name: "state".to_string(),
                description: "on or off".to_string(),
                required: true,
                value_type: ArgType::Boolean,
            }],
            examples: vec![
                format!("mpremote player {name} on"),
                format!("mpremote player {name} off"),
            ],
        }
    }
}
