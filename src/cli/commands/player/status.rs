use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{Command, CommandResult, formatting::format_field, types::CommandMetadata},
    config::Config,
    services::player::{POSITION_MAX, RemotePlayer, RemoteTrackList, VOLUME_MAX},
    unwrap_or_degraded,
};

use super::utils::{connect, service_error};

/// Command printing what the player is doing
pub struct StatusCommand {
    config: Arc<Config>,
}

impl StatusCommand {
    /// Creates a new StatusCommand
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Command for StatusCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let remote = connect(&self.config.player).await?;
        let player = remote.player();
        let tracklist = remote.tracklist();

        let status = player.get_status().await.map_err(service_error)?;
        let volume = player.volume_get().await.map_err(service_error)?;
        let position = player.position_get().await.map_err(service_error)?;

        let current = match tracklist.get_current_track().await {
            Ok(track) => tracklist.get_metadata(track).await,
            Err(e) => Err(e),
        };
        let now_playing = unwrap_or_degraded!(current, "metadata", Default::default());

        Ok([
            format_field("Status:", &status.to_string(), 12),
            format_field("Now playing:", &now_playing.display_text(), 12),
            format_field("Position:", &format!("{position}/{POSITION_MAX}"), 12),
            format_field("Volume:", &format!("{volume}/{VOLUME_MAX}"), 12),
        ]
        .join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "status".to_string(),
            description: "Show playback status, current item, position and volume".to_string(),
            category: "player".to_string(),
            args: vec![],
            examples: vec!["mpremote player status".to_string()],
        }
    }
}
