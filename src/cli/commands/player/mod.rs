//! Scripted control of the remote player.
//!
//! Each command opens its own bus connection, performs its calls and exits.
mod add;
mod identity;
mod info;
mod level;
mod modes;
mod remove;
mod status;
mod tracks;
mod transport;
mod utils;

use std::sync::Arc;

pub use add::AddCommand;
pub use identity::IdentityCommand;
pub use info::InfoCommand;
pub use level::{Level, LevelCommand};
pub use modes::{Mode, ModeCommand};
pub use remove::RemoveCommand;
pub use status::StatusCommand;
pub use tracks::TracksCommand;
pub use transport::{Transport, TransportCommand};
pub use utils::{parse_number, parse_switch};

use crate::{cli::CommandRegistry, config::Config};

/// Registers all player commands with the command registry
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `config` - Effective configuration, for the player's bus name
pub fn register_commands(registry: &mut CommandRegistry, config: Arc<Config>) {
    const CATEGORY_NAME: &str = "player";

    for transport in Transport::ALL {
        registry.register_command(
            CATEGORY_NAME,
            Box::new(TransportCommand::new(Arc::clone(&config), transport)),
        );
    }

    for level in [Level::Volume, Level::Position] {
        registry.register_command(
            CATEGORY_NAME,
            Box::new(LevelCommand::new(Arc::clone(&config), level)),
        );
    }

    for mode in Mode::ALL {
        registry.register_command(
            CATEGORY_NAME,
            Box::new(ModeCommand::new(Arc::clone(&config), mode)),
        );
    }

    registry.register_command(CATEGORY_NAME, Box::new(StatusCommand::new(Arc::clone(&config))));
    registry.register_command(CATEGORY_NAME, Box::new(AddCommand::new(Arc::clone(&config))));
    registry.register_command(CATEGORY_NAME, Box::new(InfoCommand::new(Arc::clone(&config))));
    registry.register_command(CATEGORY_NAME, Box::new(IdentityCommand::new(Arc::clone(&config))));
    registry.register_command(CATEGORY_NAME, Box::new(TracksCommand::new(Arc::clone(&config))));
    registry.register_command(CATEGORY_NAME, Box::new(RemoveCommand::new(config)));
}
