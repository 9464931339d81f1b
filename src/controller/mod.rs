//! Controller logic of the remote player window.
//!
//! Toolkit-agnostic: the controller owns a [`UiState`] mirror of the remote
//! player, translates user actions into remote calls, and keeps the mirror
//! synchronized through explicit updates, the position refresh timer and
//! track change notifications. Front-ends send [`Action`]s to the actor and
//! render the published state.

/// Actor task owning the controller
pub mod actor;
/// User commands translated to remote calls
pub mod control;
/// Local mirror of the remote player
pub mod state;
/// Status synchronization routines
pub mod sync;
/// Position refresh timer
pub mod timer;
/// Track source selection
pub mod source;
/// Window visibility and expander bookkeeping
pub mod window;

#[cfg(test)]
mod tests;

use std::sync::Arc;

pub use actor::{Action, ControllerHandle};
pub use source::TrackSource;
pub use state::{ToggleIcon, UiState};
pub use timer::RefreshTimer;
pub use window::{Expander, WindowCommand, WindowLifecycle, WindowPosition};

use crate::services::{
    common::Property,
    player::{Dispatcher, RemotePlayer, RemoteTrackList},
};

/// Keeps a [`UiState`] in sync with a remote player
///
/// All methods take `&mut self`; the controller is meant to be owned by a
/// single task (see [`actor`]) so state changes are strictly sequential.
/// Every change is published through a [`Property`] for the view to watch.
pub struct Controller<P: RemotePlayer, T: RemoteTrackList> {
    player: Arc<P>,
    tracklist: Arc<T>,
    dispatcher: Dispatcher,
    timer: RefreshTimer,
    state: UiState,
    published: Property<UiState>,
}

impl<P: RemotePlayer, T: RemoteTrackList> Controller<P, T> {
    /// Create a controller with an initial, empty state.
    pub fn new(player: Arc<P>, tracklist: Arc<T>, timer: RefreshTimer) -> Self {
        let state = UiState::default();

        Self {
            player,
            tracklist,
            dispatcher: Dispatcher::new(),
            timer,
            published: Property::new(state.clone()),
            state,
        }
    }

    /// Current local state.
    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Reactive view of the state, updated after every change.
    pub fn published(&self) -> Property<UiState> {
        self.published.clone()
    }

    /// The position refresh timer.
    pub fn timer(&self) -> &RefreshTimer {
        &self.timer
    }

    /// Dispatcher used for fire-and-forget calls.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    fn publish(&self) {
        self.published.set(self.state.clone());
    }
}
