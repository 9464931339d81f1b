use std::fmt::Display;

use crate::{
    cli::CliError,
    config::PlayerConfig,
    services::player::RemoteConnection,
};

/// Connects to the player configured in `config`.
///
/// # Errors
///
/// Returns `CliError::ServiceError` if the bus or the player is unreachable
pub async fn connect(config: &PlayerConfig) -> Result<RemoteConnection, CliError> {
    RemoteConnection::connect(config).await.map_err(service_error)
}

/// Wraps a player failure for display.
pub fn service_error(error: impl Display) -> CliError {
    CliError::ServiceError {
        service: "Player".to_string(),
        details: error.to_string(),
    }
}

/// Parses an on/off style switch.
///
/// # Errors
///
/// Returns `CliError::InvalidArgument` for anything that is not a switch
pub fn parse_switch(arg: &str, value: &str) -> Result<bool, CliError> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(CliError::InvalidArgument {
            arg: arg.to_string(),
            reason: format!("expected on or off, got '{value}'"),
        }),
    }
}

/// Parses a signed integer argument.
///
/// # Errors
///
/// Returns `CliError::InvalidArgument` if `value` is not an integer
pub fn parse_number(arg: &str, value: &str) -> Result<i32, CliError> {
    value.parse().map_err(|_| CliError::InvalidArgument {
        arg: arg.to_string(),
        reason: format!("expected an integer, got '{value}'"),
    })
}
