//! Command-line interface for scripted player control.
//!
//! Provides a hierarchical command system: commands are organized by
//! category and help text is generated from their metadata.

mod commands;
pub mod formatting;
mod registry;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use registry::CommandRegistry;
pub use service::CliService;
pub use types::{ArgType, CliError, Command, CommandArg, CommandMetadata, CommandResult};
