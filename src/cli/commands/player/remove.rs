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

use super::utils::{connect, parse_number, service_error};

/// Command deleting a playlist item
pub struct RemoveCommand {
    config: Arc<Config>,
}

impl RemoveCommand {
    /// Creates a new RemoveCommand
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Command for RemoveCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let track = parse_number("index", args.first().map(String::as_str).unwrap_or_default())?;

        connect(&self.config.player)
            .await?
            .tracklist()
            .del_track(track)
            .await
            .map_err(service_error)?;

        Ok(format!("Removed track {track}"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "remove".to_string(),
            description: "Remove an item from the playlist".to_string(),
            category: "player".to_string(),
            args: vec![CommandArg {
                name: "index".to_string(),
                description: "Playlist index as listed by 'tracks'".to_string(),
                required: true,
                value_type: ArgType::Number,
            }],
            examples: vec!["mpremote player remove 2".to_string()],
        }
    }
}
