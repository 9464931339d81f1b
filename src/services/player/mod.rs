//! Remote control of a media player over its session-bus interface.
//!
//! The player exports three objects under one well-known name: the root
//! object (`/`), the transport object (`/Player`) and the playlist
//! (`/TrackList`). Each gets a generated proxy in [`proxy`]; the async
//! [`RemotePlayer`] and [`RemoteTrackList`] traits sit in front of them so
//! controllers can be driven by in-memory fakes.

/// Session bus bootstrap and best-effort signal subscription
pub mod connection;
/// Fire-and-forget command submission
pub mod dispatch;
/// Player service error types
pub mod error;
/// Track metadata mapping
pub mod metadata;
/// D-Bus proxy trait definitions
pub mod proxy;
/// Remote handle traits and their D-Bus implementations
pub mod remote;
/// Status codes and value ranges reported by the player
pub mod types;

pub use connection::RemoteConnection;
pub use dispatch::Dispatcher;
pub use error::PlayerError;
pub use metadata::TrackMetadata;
pub use remote::{DbusPlayer, DbusTrackList, RemotePlayer, RemoteTrackList};
pub use types::{POSITION_MAX, PlaybackStatus, VOLUME_MAX};
