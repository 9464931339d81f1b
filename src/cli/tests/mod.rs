//! Unit tests for CLI module
//!
//! Tests command registry, help rendering, config commands and argument
//! parsing. No bus connection is made.

use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::{
    ArgType, CliError, CliService, Command, CommandArg, CommandMetadata, CommandRegistry,
    CommandResult,
    commands::player::{parse_number, parse_switch},
    formatting::format_error,
};
use crate::config::Config;

struct EchoCommand;

#[async_trait]
impl Command for EchoCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        Ok(args.join(" "))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "echo".to_string(),
            description: "Echo arguments".to_string(),
            category: "test".to_string(),
            args: vec![
                CommandArg {
                    name: "first".to_string(),
                    description: "Required".to_string(),
                    required: true,
                    value_type: ArgType::String,
                },
                CommandArg {
                    name: "second".to_string(),
                    description: "Optional".to_string(),
                    required: false,
                    value_type: ArgType::Number,
                },
            ],
            examples: vec![],
        }
    }
}

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn echo_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new(Arc::new(Config::default()));
    registry.register_command("test", Box::new(EchoCommand));
    registry
}

#[tokio::test]
async fn registry_executes_registered_command() {
    let registry = echo_registry();

    let output = registry
        .execute("test", "echo", &args(&["a", "1"]))
        .await
        .unwrap();

    assert_eq!(output, "a 1");
}

#[tokio::test]
async fn registry_validates_argument_count() {
    let registry = echo_registry();

    let too_few = registry.execute("test", "echo", &[]).await;
    let too_many = registry.execute("test", "echo", &args(&["a", "b", "c"])).await;

    assert!(matches!(too_few, Err(CliError::InvalidArguments(_))));
    assert!(matches!(too_many, Err(CliError::InvalidArguments(_))));
}

#[tokio::test]
async fn registry_reports_unknown_commands() {
    let registry = echo_registry();

    let no_category = registry.execute("nope", "echo", &[]).await;
    let no_command = registry.execute("test", "nope", &[]).await;

    assert!(matches!(no_category, Err(CliError::CommandNotFound(_))));
    assert!(matches!(no_command, Err(CliError::CommandNotFound(_))));
}

#[test]
fn all_commands_are_registered() {
    let service = CliService::new(Config::default());

    let listed = service.list_all();
    let categories: Vec<&str> = listed.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(categories, vec!["config", "player"]);

    let player = &listed[1].1;
    for name in [
        "add", "identity", "info", "loop", "next", "pause", "play", "position", "prev", "quit",
        "random", "remove", "repeat", "status", "stop", "tracks", "volume",
    ] {
        assert!(player.contains(&name.to_string()), "missing {name}");
    }
    assert_eq!(listed[0].1, vec!["schema", "show"]);
}

#[tokio::test]
async fn help_lists_categories() {
    let service = CliService::new(Config::default());

    let help = service.execute_command("help", "", &[]).await.unwrap();
    let player_help = service.execute_command("player", "", &[]).await.unwrap();

    assert!(help.contains("player"));
    assert!(help.contains("config"));
    assert!(player_help.contains("volume"));
    assert!(player_help.contains("[value:int]"));
    assert!(player_help.contains("<state:on|off>"));
}

#[tokio::test]
async fn config_show_prints_effective_toml() {
    let service = CliService::new(Config::default());

    let output = service.execute_command("config", "show", &[]).await.unwrap();
    let parsed = Config::from_toml_str(&output).unwrap();

    assert_eq!(parsed, Config::default());
    assert!(output.contains("org.freedesktop.MediaPlayer"));
}

#[tokio::test]
async fn config_schema_is_json() {
    let service = CliService::new(Config::default());

    let output = service.execute_command("config", "schema", &[]).await.unwrap();
    let schema: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert!(schema["properties"]["player"].is_object());
}

#[tokio::test]
async fn invalid_switch_fails_before_connecting() {
    let service = CliService::new(Config::default());

    let result = service.execute_command("player", "loop", &args(&["maybe"])).await;

    assert!(matches!(result, Err(CliError::InvalidArgument { .. })));
}

#[test]
fn switches_accept_common_spellings() {
    for on in ["on", "ON", "true", "yes", "1"] {
        assert!(parse_switch("state", on).unwrap());
    }
    for off in ["off", "false", "No", "0"] {
        assert!(!parse_switch("state", off).unwrap());
    }
    assert!(parse_switch("state", "").is_err());
}

#[test]
fn numbers_must_be_integers() {
    assert_eq!(parse_number("value", "-5").unwrap(), -5);
    assert!(parse_number("value", "5.5").is_err());
    assert!(parse_number("value", "loud").is_err());
}

#[test]
fn errors_are_styled_red() {
    let error = CliError::CommandNotFound("x".to_string()).to_string();

    assert_eq!(
        format_error(&error),
        "\x1b[1m\x1b[31mCommand not found: x\x1b[0m"
    );
}
