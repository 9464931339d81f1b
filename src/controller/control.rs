use std::{path::Path, sync::Arc};

use tracing::{debug, instrument};

use super::{Controller, TrackSource};
use crate::services::player::{PlayerError, RemotePlayer, RemoteTrackList};

impl<P: RemotePlayer, T: RemoteTrackList> Controller<P, T> {
    /// Start playback and resynchronize.
    ///
    /// # Errors
    /// Returns error if the call or the following update fails.
    #[instrument(skip(self))]
    pub async fn play(&mut self) -> Result<(), PlayerError> {
        self.player.play().await?;
        self.update().await
    }

    /// Toggle pause, then align the toggle icon with the resulting status.
    ///
    /// # Errors
    /// Returns error if the call or the following update fails.
    #[instrument(skip(self))]
    pub async fn toggle_pause(&mut self) -> Result<(), PlayerError> {
        self.player.pause().await?;
        self.get_play_status().await?;
        self.update().await
    }

    /// Skip to the next item without waiting, then resynchronize.
    ///
    /// # Errors
    /// Returns error if the update fails.
    #[instrument(skip(self))]
    pub async fn next(&mut self) -> Result<(), PlayerError> {
        let player = Arc::clone(&self.player);
        self.dispatcher.submit("next", async move { player.next().await });
        self.update().await
    }

    /// Go back to the previous item without waiting, then resynchronize.
    ///
    /// # Errors
    /// Returns error if the update fails.
    #[instrument(skip(self))]
    pub async fn prev(&mut self) -> Result<(), PlayerError> {
        let player = Arc::clone(&self.player);
        self.dispatcher.submit("prev", async move { player.prev().await });
        self.update().await
    }

    /// Stop playback without waiting, then resynchronize.
    ///
    /// # Errors
    /// Returns error if the update fails.
    #[instrument(skip(self))]
    pub async fn stop(&mut self) -> Result<(), PlayerError> {
        let player = Arc::clone(&self.player);
        self.dispatcher.submit("stop", async move { player.stop().await });
        self.update().await
    }

    /// Ask the player to exit without waiting, and clear the display text.
    #[instrument(skip(self))]
    pub fn quit(&mut self) {
        let player = Arc::clone(&self.player);
        self.dispatcher.submit("quit", async move { player.quit().await });

        self.state.set_display_text("");
        self.publish();
    }

    /// Enqueue and play the typed location, or the chosen directory.
    ///
    /// Nothing is sent when both are empty.
    ///
    /// # Errors
    /// Returns error if the player rejects the item or the update fails.
    #[instrument(skip(self))]
    pub async fn add_track(
        &mut self,
        text: Option<&str>,
        chooser: Option<&Path>,
    ) -> Result<(), PlayerError> {
        let Some(source) = TrackSource::resolve(text, chooser) else {
            debug!("Nothing to add");
            return Ok(());
        };

        self.tracklist.add_track(&source.uri(), true).await?;
        self.update().await
    }

    /// Apply a volume slider change.
    pub fn set_volume(&mut self, volume: i32) {
        self.state.set_volume(volume);
        self.publish();

        let player = Arc::clone(&self.player);
        self.dispatcher
            .submit("volume", async move { player.volume_set(volume).await });
    }

    /// Apply a position slider change.
    pub fn set_position(&mut self, position: i32) {
        self.state.set_position(position);
        self.publish();

        let player = Arc::clone(&self.player);
        self.dispatcher
            .submit("position", async move { player.position_set(position).await });
    }
}
