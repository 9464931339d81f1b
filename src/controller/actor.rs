use std::{path::PathBuf, sync::Arc};

use futures::StreamExt;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use super::{Controller, RefreshTimer, UiState};
use crate::{
    config::PlayerConfig,
    services::{
        common::Property,
        player::{PlayerError, RemotePlayer, RemoteTrackList, TrackMetadata, connection::TrackChanges},
    },
};

/// Message consumed by the controller actor
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Resynchronize with the player
    Update,
    /// Start playback
    Play,
    /// Toggle pause
    TogglePause,
    /// Skip to the next item
    Next,
    /// Go back to the previous item
    Prev,
    /// Stop playback
    Stop,
    /// Ask the player to exit
    Quit,
    /// Enqueue the typed location or the chosen directory
    AddTrack {
        /// Content of the location field
        text: Option<String>,
        /// Directory selected in the chooser
        chooser: Option<PathBuf>,
    },
    /// Volume slider moved
    SetVolume(i32),
    /// Position slider moved
    SetPosition(i32),
    /// Refresh timer fired
    RefreshTick,
    /// Player announced a new item
    TrackChanged(TrackMetadata),
}

/// Handle to a running controller actor
///
/// Cloning is cheap; every clone feeds the same actor.
#[derive(Clone)]
pub struct ControllerHandle {
    actions: UnboundedSender<Action>,
    state: Property<UiState>,
}

impl ControllerHandle {
    /// Queue an action. Dropped silently once the actor has stopped.
    pub fn send(&self, action: Action) {
        if self.actions.send(action).is_err() {
            debug!("Controller stopped, action dropped");
        }
    }

    /// Reactive view of the controller state.
    pub fn state(&self) -> &Property<UiState> {
        &self.state
    }
}

/// Spawn the controller actor on the current tokio runtime.
///
/// When `track_changes` is given, each notification is forwarded to the
/// actor as [`Action::TrackChanged`].
pub fn spawn<P, T>(
    player: Arc<P>,
    tracklist: Arc<T>,
    config: &PlayerConfig,
    track_changes: Option<TrackChanges>,
) -> ControllerHandle
where
    P: RemotePlayer,
    T: RemoteTrackList,
{
    let (actions, receiver) = mpsc::unbounded_channel();
    let timer = RefreshTimer::new(config.refresh_interval(), actions.downgrade());
    let controller = Controller::new(player, tracklist, timer);
    let state = controller.published();

    if let Some(mut changes) = track_changes {
        let forward = actions.downgrade();
        tokio::spawn(async move {
            while let Some(metadata) = changes.next().await {
                let Some(actions) = forward.upgrade() else {
                    break;
                };
                if actions.send(Action::TrackChanged(metadata)).is_err() {
                    break;
                }
            }
            debug!("Track change forwarding ended");
        });
    }

    tokio::spawn(run(controller, receiver));

    ControllerHandle { actions, state }
}

/// Consume actions until every sender is gone.
pub async fn run<P, T>(mut controller: Controller<P, T>, mut actions: UnboundedReceiver<Action>)
where
    P: RemotePlayer,
    T: RemoteTrackList,
{
    info!("Controller started");

    while let Some(action) = actions.recv().await {
        let name = action_name(&action);
        if let Err(e) = handle(&mut controller, action).await {
            warn!(action = name, error = %e, "Action failed");
        }
    }

    controller.timer.stop();
    info!("Controller stopped");
}

async fn handle<P, T>(controller: &mut Controller<P, T>, action: Action) -> Result<(), PlayerError>
where
    P: RemotePlayer,
    T: RemoteTrackList,
{
    match action {
        Action::Update => controller.update().await,
        Action::Play => controller.play().await,
        Action::TogglePause => controller.toggle_pause().await,
        Action::Next => controller.next().await,
        Action::Prev => controller.prev().await,
        Action::Stop => controller.stop().await,
        Action::Quit => {
            controller.quit();
            Ok(())
        }
        Action::AddTrack { text, chooser } => {
            controller
                .add_track(text.as_deref(), chooser.as_deref())
                .await
        }
        Action::SetVolume(volume) => {
            controller.set_volume(volume);
            Ok(())
        }
        Action::SetPosition(position) => {
            controller.set_position(position);
            Ok(())
        }
        Action::RefreshTick => controller.refresh_position().await,
        Action::TrackChanged(metadata) => {
            controller.on_track_change(&metadata);
            Ok(())
        }
    }
}

fn action_name(action: &Action) -> &'static str {
    match action {
        Action::Update => "update",
        Action::Play => "play",
        Action::TogglePause => "toggle-pause",
        Action::Next => "next",
        Action::Prev => "prev",
        Action::Stop => "stop",
        Action::Quit => "quit",
        Action::AddTrack { .. } => "add-track",
        Action::SetVolume(_) => "set-volume",
        Action::SetPosition(_) => "set-position",
        Action::RefreshTick => "refresh-tick",
        Action::TrackChanged(_) => "track-changed",
    }
}
