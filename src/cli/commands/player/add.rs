use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config::Config,
    services::player::RemoteTrackList,
};

use super::utils::{connect, service_error};

const NO_PLAY_FLAG: &str = "--no-play";

/// Command appending a location to the playlist
pub struct AddCommand {
    config: Arc<Config>,
}

impl AddCommand {
    /// Creates a new AddCommand
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Command for AddCommand {
    /// Enqueue the location, starting it unless `--no-play` is given
    ///
    /// # Errors
    ///
    /// Returns CliError if the second argument is not `--no-play` or the
    /// player rejects the location
    async fn execute(&self, args: &[String]) -> CommandResult {
        let uri = args
            .first()
            .filter(|uri| !uri.is_empty())
            .ok_or_else(|| CliError::InvalidArgument {
                arg: "uri".to_string(),
                reason: "location must not be empty".to_string(),
            })?;

        let play_immediately = match args.get(1).map(String::as_str) {
            None => true,
            Some(NO_PLAY_FLAG) => false,
            Some(other) => {
                return Err(CliError::InvalidArgument {
                    arg: "flag".to_string(),
                    reason: format!("unknown flag '{other}'"),
                });
            }
        };

        connect(&self.config.player)
            .await?
            .tracklist()
            .add_track(uri, play_immediately)
            .await
            .map_err(service_error)?;

        if play_immediately {
            Ok(format!("Playing {uri}"))
        } else {
            Ok(format!("Added {uri}"))
        }
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "add".to_string(),
            description: "Add a location to the playlist and play it".to_string(),
            category: "player".to_string(),
            args: vec![
                CommandArg {
                    name: "uri".to_string(),
                    description: "File, stream or 'directory://' location".to_string(),
                    required: true,
                    value_type: ArgType::Path,
                },
                CommandArg {
                    name: "flag".to_string(),
                    description: format!("{NO_PLAY_FLAG} to only enqueue"),
                    required: false,
                    value_type: ArgType::String,
                },
            ],
            examples: vec![
                "mpremote player add /media/mp3/song.mp3".to_string(),
                "mpremote player add directory:///media/mp3 --no-play".to_string(),
            ],
        }
    }
}
