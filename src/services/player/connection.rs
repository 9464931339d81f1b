use futures::{StreamExt, future, stream::BoxStream};
use tracing::{debug, info, instrument};
use zbus::Connection;

use super::{
    DbusPlayer, DbusTrackList, PlayerError, TrackMetadata,
    proxy::{MediaPlayerProxy, MediaPlayerRootProxy, TrackListProxy},
};
use crate::{config::PlayerConfig, degraded};

/// Stream of metadata pushed by the player whenever the current item changes.
pub type TrackChanges = BoxStream<'static, TrackMetadata>;

/// Session bus connection and the player's object handles
///
/// Created once at startup and kept for the process lifetime. Every
/// failure in [`RemoteConnection::connect`] is fatal to the caller; only
/// the track change subscription is best-effort.
#[derive(Clone)]
pub struct RemoteConnection {
    connection: Connection,
    root: MediaPlayerRootProxy<'static>,
    player: DbusPlayer,
    tracklist: DbusTrackList,
}

impl RemoteConnection {
    /// Connect to the session bus and build proxies for the player objects.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::InitializationFailed` if the bus is unavailable
    /// or the configured bus name is not valid.
    #[instrument(skip(config), fields(bus_name = %config.bus_name))]
    pub async fn connect(config: &PlayerConfig) -> Result<Self, PlayerError> {
        let connection = Connection::session().await.map_err(|e| {
            PlayerError::InitializationFailed(format!("D-Bus connection failed: {e}"))
        })?;

        let root = MediaPlayerRootProxy::builder(&connection)
            .destination(config.bus_name.clone())
            .map_err(|e| init_failed("root", e))?
            .build()
            .await
            .map_err(|e| init_failed("root", e))?;

        let player = MediaPlayerProxy::builder(&connection)
            .destination(config.bus_name.clone())
            .map_err(|e| init_failed("/Player", e))?
            .build()
            .await
            .map_err(|e| init_failed("/Player", e))?;

        let tracklist = TrackListProxy::builder(&connection)
            .destination(config.bus_name.clone())
            .map_err(|e| init_failed("/TrackList", e))?
            .build()
            .await
            .map_err(|e| init_failed("/TrackList", e))?;

        info!("Connected to player at {}", config.bus_name);

        Ok(Self {
            connection,
            root,
            player: DbusPlayer::new(player),
            tracklist: DbusTrackList::new(tracklist),
        })
    }

    /// Handle to the `/Player` object.
    pub fn player(&self) -> DbusPlayer {
        self.player.clone()
    }

    /// Handle to the `/TrackList` object.
    pub fn tracklist(&self) -> DbusTrackList {
        self.tracklist.clone()
    }

    /// The underlying bus connection, shared with other services such as the tray.
    pub fn bus(&self) -> &Connection {
        &self.connection
    }

    /// Player name and version.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::DbusError` if the call fails.
    pub async fn identity(&self) -> Result<String, PlayerError> {
        Ok(self.root.identity().await?)
    }

    /// Subscribe to the player's track change signal.
    ///
    /// Returns `None` when the subscription cannot be set up; the feature is
    /// then unavailable and callers rely on explicit refreshes instead.
    pub async fn subscribe_track_changes(&self) -> Option<TrackChanges> {
        match self.player.proxy().receive_track_change().await {
            Ok(stream) => {
                debug!("Subscribed to TrackChange");
                Some(
                    stream
                        .filter_map(|signal| {
                            let metadata = match signal.args() {
                                Ok(args) => Some(TrackMetadata::from(args.metadata())),
                                Err(e) => {
                                    debug!("Ignoring malformed TrackChange signal: {e}");
                                    None
                                }
                            };
                            future::ready(metadata)
                        })
                        .boxed(),
                )
            }
            Err(e) => {
                degraded!("track-change", e);
                None
            }
        }
    }
}

fn init_failed(object: &str, error: zbus::Error) -> PlayerError {
    PlayerError::InitializationFailed(format!("Failed to reach {object} object: {error}"))
}
