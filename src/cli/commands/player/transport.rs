use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    config::Config,
    services::player::RemotePlayer,
};

use super::utils::{connect, service_error};

/// Argument-less transport command sent to `/Player`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// Start playback
    Play,
    /// Toggle pause
    Pause,
    /// Stop playback
    Stop,
    /// Next item
    Next,
    /// Previous item
    Prev,
    /// Ask the player to exit
    Quit,
}

impl Transport {
    /// All transport commands, in help order.
    pub const ALL: [Self; 6] = [
        Self::Play,
        Self::Pause,
        Self::Stop,
        Self::Next,
        Self::Prev,
        Self::Quit,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Stop => "stop",
            Self::Next => "next",
            Self::Prev => "prev",
            Self::Quit => "quit",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Play => "Start playback",
            Self::Pause => "Toggle pause",
            Self::Stop => "Stop playback",
            Self::Next => "Skip to the next item",
            Self::Prev => "Go back to the previous item",
            Self::Quit => "Ask the player to exit",
        }
    }

    fn confirmation(self) -> &'static str {
        match self {
            Self::Play => "Playback started",
            Self::Pause => "Pause toggled",
            Self::Stop => "Playback stopped",
            Self::Next => "Skipped to next item",
            Self::Prev => "Went back to previous item",
            Self::Quit => "Player asked to quit",
        }
    }
}

/// Command sending one [`Transport`] call
pub struct TransportCommand {
    config: Arc<Config>,
    transport: Transport,
}

impl TransportCommand {
    /// Creates a command for `transport`
    pub fn new(config: Arc<Config>, transport: Transport) -> Self {
        Self { config, transport }
    }
}

#[async_trait]
impl Command for TransportCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let player = connect(&self.config.player).await?.player();

        match self.transport {
            Transport::Play => player.play().await,
            Transport::Pause => player.pause().await,
            Transport::Stop => player.stop().await,
            Transport::Next => player.next().await,
            Transport::Prev => player.prev().await,
            Transport::Quit => player.quit().await,
        }
        .map_err(service_error)?;

        Ok(self.transport.confirmation().to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: self.transport.name().to_string(),
            description: self.transport.description().to_string(),
            category: "player".to_string(),
            args: vec![],
            examples: vec![format!("mpremote player {}", self.transport.name())],
        }
    }
}
