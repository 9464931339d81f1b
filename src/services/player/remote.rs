use async_trait::async_trait;
use tracing::instrument;

use super::{
    PlaybackStatus, PlayerError, TrackMetadata,
    proxy::{MediaPlayerProxy, TrackListProxy},
};

/// Transport and status operations of a remote player
///
/// Mirrors the methods of the player's `/Player` object. Implementations
/// must be cheap to share: controllers hold them behind an `Arc` and hand
/// clones to detached tasks for fire-and-forget calls.
#[async_trait]
pub trait RemotePlayer: Send + Sync + 'static {
    /// Start playback.
    async fn play(&self) -> Result<(), PlayerError>;

    /// Toggle pause.
    async fn pause(&self) -> Result<(), PlayerError>;

    /// Stop playback.
    async fn stop(&self) -> Result<(), PlayerError>;

    /// Skip to the next item.
    async fn next(&self) -> Result<(), PlayerError>;

    /// Go back to the previous item.
    async fn prev(&self) -> Result<(), PlayerError>;

    /// Ask the player process to exit.
    async fn quit(&self) -> Result<(), PlayerError>;

    /// Current volume.
    async fn volume_get(&self) -> Result<i32, PlayerError>;

    /// Set the volume.
    async fn volume_set(&self, volume: i32) -> Result<(), PlayerError>;

    /// Current position.
    async fn position_get(&self) -> Result<i32, PlayerError>;

    /// Set the position.
    async fn position_set(&self, position: i32) -> Result<(), PlayerError>;

    /// Current playback status.
    async fn get_status(&self) -> Result<PlaybackStatus, PlayerError>;

    /// Metadata of the item being played.
    async fn get_metadata(&self) -> Result<TrackMetadata, PlayerError>;
}

/// Playlist operations of a remote player
#[async_trait]
pub trait RemoteTrackList: Send + Sync + 'static {
    /// Append `uri` to the playlist, starting it when `play_immediately` is set.
    async fn add_track(&self, uri: &str, play_immediately: bool) -> Result<(), PlayerError>;

    /// Index of the item being played.
    async fn get_current_track(&self) -> Result<i32, PlayerError>;

    /// Metadata of the item at `track`.
    async fn get_metadata(&self, track: i32) -> Result<TrackMetadata, PlayerError>;

    /// Number of items in the playlist.
    async fn get_length(&self) -> Result<i32, PlayerError>;

    /// Remove the item at `track`.
    async fn del_track(&self, track: i32) -> Result<(), PlayerError>;

    /// Enable or disable looping over the playlist.
    async fn set_loop(&self, enabled: bool) -> Result<(), PlayerError>;

    /// Enable or disable repeating the current item.
    async fn set_repeat(&self, enabled: bool) -> Result<(), PlayerError>;

    /// Enable or disable random order.
    async fn set_random(&self, enabled: bool) -> Result<(), PlayerError>;
}

fn control_failed(operation: &str, error: zbus::Error) -> PlayerError {
    PlayerError::ControlFailed(format!("{operation} failed: {error}"))
}

/// [`RemotePlayer`] backed by the `/Player` D-Bus object.
#[derive(Clone)]
pub struct DbusPlayer {
    proxy: MediaPlayerProxy<'static>,
}

impl DbusPlayer {
    /// Wrap an existing proxy.
    pub fn new(proxy: MediaPlayerProxy<'static>) -> Self {
        Self { proxy }
    }

    /// The underlying proxy, for signal subscriptions.
    pub fn proxy(&self) -> &MediaPlayerProxy<'static> {
        &self.proxy
    }
}

#[async_trait]
impl RemotePlayer for DbusPlayer {
    #[instrument(skip(self))]
    async fn play(&self) -> Result<(), PlayerError> {
        self.proxy
            .play()
            .await
            .map_err(|e| control_failed("Play", e))
    }

    #[instrument(skip(self))]
    async fn pause(&self) -> Result<(), PlayerError> {
        self.proxy
            .pause()
            .await
            .map_err(|e| control_failed("Pause", e))
    }

    #[instrument(skip(self))]
    async fn stop(&self) -> Result<(), PlayerError> {
        self.proxy
            .stop()
            .await
            .map_err(|e| control_failed("Stop", e))
    }

    #[instrument(skip(self))]
    async fn next(&self) -> Result<(), PlayerError> {
        self.proxy
            .next()
            .await
            .map_err(|e| control_failed("Next", e))
    }

    #[instrument(skip(self))]
    async fn prev(&self) -> Result<(), PlayerError> {
        self.proxy
            .prev()
            .await
            .map_err(|e| control_failed("Prev", e))
    }

    #[instrument(skip(self))]
    async fn quit(&self) -> Result<(), PlayerError> {
        self.proxy
            .quit()
            .await
            .map_err(|e| control_failed("Quit", e))
    }

    async fn volume_get(&self) -> Result<i32, PlayerError> {
        Ok(self.proxy.volume_get().await?)
    }

    #[instrument(skip(self))]
    async fn volume_set(&self, volume: i32) -> Result<(), PlayerError> {
        self.proxy
            .volume_set(volume)
            .await
            .map_err(|e| control_failed("VolumeSet", e))
    }

    async fn position_get(&self) -> Result<i32, PlayerError> {
        Ok(self.proxy.position_get().await?)
    }

    #[instrument(skip(self))]
    async fn position_set(&self, position: i32) -> Result<(), PlayerError> {
        self.proxy
            .position_set(position)
            .await
            .map_err(|e| control_failed("PositionSet", e))
    }

    async fn get_status(&self) -> Result<PlaybackStatus, PlayerError> {
        Ok(PlaybackStatus::from(self.proxy.get_status().await?))
    }

    async fn get_metadata(&self) -> Result<TrackMetadata, PlayerError> {
        Ok(TrackMetadata::from(self.proxy.get_metadata().await?))
    }
}

/// [`RemoteTrackList`] backed by the `/TrackList` D-Bus object.
#[derive(Clone)]
pub struct DbusTrackList {
    proxy: TrackListProxy<'static>,
}

impl DbusTrackList {
    /// Wrap an existing proxy.
    pub fn new(proxy: TrackListProxy<'static>) -> Self {
        Self { proxy }
    }
}

#[async_trait]
impl RemoteTrackList for DbusTrackList {
    #[instrument(skip(self))]
    async fn add_track(&self, uri: &str, play_immediately: bool) -> Result<(), PlayerError> {
        self.proxy
            .add_track(uri, play_immediately)
            .await
            .map_err(|e| control_failed("AddTrack", e))
    }

    async fn get_current_track(&self) -> Result<i32, PlayerError> {
        Ok(self.proxy.get_current_track().await?)
    }

    async fn get_metadata(&self, track: i32) -> Result<TrackMetadata, PlayerError> {
        Ok(TrackMetadata::from(self.proxy.get_metadata(track).await?))
    }

    async fn get_length(&self) -> Result<i32, PlayerError> {
        Ok(self.proxy.get_length().await?)
    }

    #[instrument(skip(self))]
    async fn del_track(&self, track: i32) -> Result<(), PlayerError> {
        self.proxy
            .del_track(track)
            .await
            .map_err(|e| control_failed("DelTrack", e))
    }

    #[instrument(skip(self))]
    async fn set_loop(&self, enabled: bool) -> Result<(), PlayerError> {
        self.proxy
            .set_loop(enabled)
            .await
            .map_err(|e| control_failed("Loop", e))
    }

    #[instrument(skip(self))]
    async fn set_repeat(&self, enabled: bool) -> Result<(), PlayerError> {
        self.proxy
            .set_repeat(enabled)
            .await
            .map_err(|e| control_failed("Repeat", e))
    }

    #[instrument(skip(self))]
    async fn set_random(&self, enabled: bool) -> Result<(), PlayerError> {
        self.proxy
            .set_random(enabled)
            .await
            .map_err(|e| control_failed("Random", e))
    }
}
