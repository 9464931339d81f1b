/// Shared building blocks for services
pub mod common;
/// Object request broker client
pub mod broker;
/// Legacy D-Bus media player control
pub mod player;
