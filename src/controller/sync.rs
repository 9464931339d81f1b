use tracing::{debug, instrument};

use super::Controller;
use crate::{
    services::player::{PlaybackStatus, PlayerError, RemotePlayer, RemoteTrackList, TrackMetadata},
    unwrap_or_degraded,
};

impl<P: RemotePlayer, T: RemoteTrackList> Controller<P, T> {
    /// Refresh display text, volume and playback status from the player.
    ///
    /// Metadata is best effort: if the current item cannot be described the
    /// display text is cleared. Volume and status failures are returned.
    ///
    /// # Errors
    /// Returns error if the volume or the status cannot be fetched.
    #[instrument(skip(self))]
    pub async fn update(&mut self) -> Result<(), PlayerError> {
        let metadata = unwrap_or_degraded!(
            self.current_metadata().await,
            "metadata",
            TrackMetadata::default()
        );
        let volume = self.player.volume_get().await?;

        self.state.set_display_text(metadata.display_text());
        self.state.set_volume(volume);
        self.publish();

        self.get_play_status().await?;
        Ok(())
    }

    /// Fetch the playback status and align the toggle icon with it.
    ///
    /// Entering the playing state arms the refresh timer.
    ///
    /// # Errors
    /// Returns error if the status cannot be fetched.
    #[instrument(skip(self))]
    pub async fn get_play_status(&mut self) -> Result<PlaybackStatus, PlayerError> {
        let status = self.player.get_status().await?;
        debug!(%status, "Fetched playback status");

        self.state.set_playing(status.is_playing());
        if status.is_playing() {
            self.timer.start();
        }
        self.publish();

        Ok(status)
    }

    /// Handle one refresh tick: fetch the position, then stop the timer if
    /// the player was no longer playing.
    ///
    /// # Errors
    /// Returns error if the position cannot be fetched. The timer decision
    /// is made either way.
    pub async fn refresh_position(&mut self) -> Result<(), PlayerError> {
        let fetched = self.player.position_get().await;
        if let Ok(position) = fetched {
            self.state.set_position(position);
        }

        if !self.state.playing() {
            self.timer.stop();
        }
        self.publish();

        fetched.map(|_| ())
    }

    /// Apply a track change notification pushed by the player.
    ///
    /// Only the display text is taken from the payload; the timer is
    /// re-armed since a new item implies playback.
    pub fn on_track_change(&mut self, metadata: &TrackMetadata) {
        debug!(text = %metadata.display_text(), "Track changed");

        self.timer.start();
        self.state.set_display_text(metadata.display_text());
        self.publish();
    }

    async fn current_metadata(&self) -> Result<TrackMetadata, PlayerError> {
        let track = self.tracklist.get_current_track().await?;
        self.tracklist.get_metadata(track).await
    }
}
