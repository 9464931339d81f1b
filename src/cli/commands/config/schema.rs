use async_trait::async_trait;
use schemars::schema_for;

use crate::{
    cli::{CliError, Command, CommandResult, types::CommandMetadata},
    config::Config,
};

/// Command printing the JSON schema of the configuration file.
///
/// Editors with TOML schema support can use it for completion and
/// validation.
pub struct SchemaCommand;

#[async_trait]
impl Command for SchemaCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let schema = schema_for!(Config);

        serde_json::to_string_pretty(&schema).map_err(|e| CliError::ConfigError(e.to_string()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "schema".to_string(),
            description: "Print the JSON schema of the configuration file".to_string(),
            category: "config".to_string(),
            args: vec![],
            examples: vec!["mpremote config schema > mpremote.schema.json".to_string()],
        }
    }
}
