/// Errors that can occur while talking to the remote player
#[derive(thiserror::Error, Debug)]
pub enum PlayerError {
    /// D-Bus communication error
    #[error("D-Bus operation failed: {0}")]
    DbusError(#[from] zbus::Error),

    /// Failed to connect to the bus or reach the player objects
    #[error("Failed to initialize player connection: {0}")]
    InitializationFailed(String),

    /// A transport or playlist command was rejected
    #[error("Failed to control player: {0}")]
    ControlFailed(String),
}
