use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        Command, CommandResult,
        formatting::format_field,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config::Config,
    services::player::RemoteTrackList,
};

use super::utils::{connect, parse_number, service_error};

/// Command printing every metadata field of a playlist item
pub struct InfoCommand {
    config: Arc<Config>,
}

impl InfoCommand {
    /// Creates a new InfoCommand
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Command for InfoCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let requested = args
            .first()
            .map(|track| parse_number("track", track))
            .transpose()?;
        let tracklist = connect(&self.config.player).await?.tracklist();

        let track = match requested {
            Some(track) => track,
            None => tracklist.get_current_track().await.map_err(service_error)?,
        };
        let metadata = tracklist.get_metadata(track).await.map_err(service_error)?;

        if metadata.is_empty() {
            return Ok(format!("No metadata for track {track}"));
        }

        let width = metadata.iter_sorted().map(|(key, _)| key.len() + 1).max().unwrap_or(0);
        let lines: Vec<String> = metadata
            .iter_sorted()
            .map(|(key, value)| format_field(&format!("{key}:"), value, width))
            .collect();

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "info".to_string(),
            description: "Show metadata of a playlist item".to_string(),
            category: "player".to_string(),
            args: vec![CommandArg {
                name: "track".to_string(),
                description: "Playlist index. Uses the current item if omitted.".to_string(),
                required: false,
                value_type: ArgType::Number,
            }],
            examples: vec![
                "mpremote player info".to_string(),
                "mpremote player info 3".to_string(),
            ],
        }
    }
}
