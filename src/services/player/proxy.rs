#![allow(missing_docs)]

use std::collections::HashMap;

use zbus::{Result, proxy, zvariant::OwnedValue};

/// Root object of the player
///
/// Only carries the player's identification string.
#[proxy(
    interface = "org.freedesktop.MediaPlayer",
    default_service = "org.freedesktop.MediaPlayer",
    default_path = "/"
)]
pub trait MediaPlayerRoot {
    /// Player name and version, e.g. "vlc 0.9.0"
    fn identity(&self) -> Result<String>;
}

/// Transport control object of the player
#[proxy(
    interface = "org.freedesktop.MediaPlayer",
    default_service = "org.freedesktop.MediaPlayer",
    default_path = "/Player"
)]
pub trait MediaPlayer {
    /// Start playback
    fn play(&self) -> Result<()>;

    /// Toggle pause
    fn pause(&self) -> Result<()>;

    /// Stop playback
    fn stop(&self) -> Result<()>;

    /// Skip to next playlist item
    fn next(&self) -> Result<()>;

    /// Go back to previous playlist item
    fn prev(&self) -> Result<()>;

    /// Terminate the player process
    fn quit(&self) -> Result<()>;

    /// Current volume in percent
    fn volume_get(&self) -> Result<i32>;

    /// Set volume in percent
    fn volume_set(&self, volume: i32) -> Result<()>;

    /// Current position in the range [0; 1000]
    fn position_get(&self) -> Result<i32>;

    /// Set position in the range [0; 1000]
    fn position_set(&self, position: i32) -> Result<()>;

    /// Playback status: 0 playing, 1 paused, 2 stopped
    fn get_status(&self) -> Result<i32>;

    /// Metadata of the item being played
    fn get_metadata(&self) -> Result<HashMap<String, OwnedValue>>;

    /// Emitted when the current playlist item changes
    #[zbus(signal)]
    fn track_change(&self, metadata: HashMap<String, OwnedValue>) -> Result<()>;
}

/// Playlist object of the player
#[proxy(
    interface = "org.freedesktop.MediaPlayer",
    default_service = "org.freedesktop.MediaPlayer",
    default_path = "/TrackList"
)]
pub trait TrackList {
    /// Append a location to the playlist, starting it when `play` is set
    fn add_track(&self, uri: &str, play: bool) -> Result<()>;

    /// Index of the item being played
    fn get_current_track(&self) -> Result<i32>;

    /// Metadata of the item at `position`
    fn get_metadata(&self, position: i32) -> Result<HashMap<String, OwnedValue>>;

    /// Number of playlist items
    fn get_length(&self) -> Result<i32>;

    /// Remove the item at `position`
    fn del_track(&self, position: i32) -> Result<()>;

    /// Loop the whole playlist
    #[zbus(name = "Loop")]
    fn set_loop(&self, enabled: bool) -> Result<()>;

    /// Repeat the current item
    #[zbus(name = "Repeat")]
    fn set_repeat(&self, enabled: bool) -> Result<()>;

    /// Play items in random order
    #[zbus(name = "Random")]
    fn set_random(&self, enabled: bool) -> Result<()>;
}
