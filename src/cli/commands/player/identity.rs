use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    config::Config,
};

use super::utils::{connect, service_error};

/// Command printing the player's name and version
pub struct IdentityCommand {
    config: Arc<Config>,
}

impl IdentityCommand {
    /// Creates a new IdentityCommand
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Command for IdentityCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        connect(&self.config.player)
            .await?
            .identity()
            .await
            .map_err(service_error)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "identity".to_string(),
            description: "Show the player's name and version".to_string(),
            category: "player".to_string(),
            args: vec![],
            examples: vec!["mpremote player identity".to_string()],
        }
    }
}
