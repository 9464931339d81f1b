use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    config::Config,
    services::player::RemoteTrackList,
};

use super::utils::{connect, service_error};

/// Command listing the playlist
pub struct TracksCommand {
    config: Arc<Config>,
}

impl TracksCommand {
    /// Creates a new TracksCommand
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Command for TracksCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let tracklist = connect(&self.config.player).await?.tracklist();

        let length = tracklist.get_length().await.map_err(service_error)?;
        if length <= 0 {
            return Ok("Playlist is empty".to_string());
        }
        let current = tracklist.get_current_track().await.ok();

        let mut lines = Vec::new();
        for track in 0..length {
            let text = match tracklist.get_metadata(track).await {
                Ok(metadata) => metadata.display_text(),
                Err(e) => {
                    debug!(track, error = %e, "No metadata for playlist item");
                    String::new()
                }
            };
            let marker = if current == Some(track) { "*" } else { " " };
            lines.push(format!("{marker} {track:>3}  {text}"));
        }

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "tracks".to_string(),
            description: "List the playlist, marking the current item".to_string(),
            category: "player".to_string(),
            args: vec![],
            examples: vec!["mpremote player tracks".to_string()],
        }
    }
}
