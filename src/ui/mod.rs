//! Desktop front-end: relm4 window and tray icon.
//!
//! The window renders the controller's published state and turns widget
//! events into controller actions. The toolkit runs on the main thread; the
//! controller, the refresh timer and the bus connection live on a separate
//! tokio runtime for the lifetime of the window.

/// Main window component
pub mod app;
/// StatusNotifierItem tray icon
pub mod tray;

use std::{error::Error, sync::Arc};

use relm4::RelmApp;
use tracing::info;

use crate::{config::Config, controller::actor, services::player::RemoteConnection};

const APP_ID: &str = "org.mpremote.Controller";

/// Connect to the player and run the window until it is closed.
///
/// # Errors
///
/// Returns error if the runtime cannot be built or the player is not
/// reachable on the session bus.
pub fn run(config: Config) -> Result<(), Box<dyn Error>> {
    let runtime = tokio::runtime::Runtime::new()?;

    let (remote, controller, tray) = runtime.block_on(async {
        let remote = RemoteConnection::connect(&config.player).await?;
        let changes = remote.subscribe_track_changes().await;
        let controller = actor::spawn(
            Arc::new(remote.player()),
            Arc::new(remote.tracklist()),
            &config.player,
            changes,
        );
        let tray = tray::register(remote.bus(), &config.ui).await;

        Ok::<_, Box<dyn Error>>((remote, controller, tray))
    })?;

    info!(title = %config.ui.title, "Starting controller window");
    RelmApp::new(APP_ID)
        .with_args(Vec::new())
        .run::<app::App>(app::AppInit {
            library: config.library.existing_directory(),
            ui: config.ui,
            controller,
            tray,
        });

    drop(remote);
    info!("Controller window closed");
    Ok(())
}
