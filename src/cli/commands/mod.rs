/// Configuration inspection commands
pub mod config;
/// Remote player control commands
pub mod player;
