//! Client for the player's object request broker interface.
//!
//! The player publishes a stringified object reference in a file. The
//! client decodes it, opens an IIOP connection and invokes operations of the
//! media control object with GIOP 1.0 messages.

/// Common Data Representation codec
pub mod cdr;
/// Media control client
pub mod client;
/// Error types
pub mod error;
/// GIOP message framing
pub mod giop;
/// Interoperable object references
pub mod ior;
/// Position types
pub mod types;

pub use client::MediaControlClient;
pub use error::BrokerError;
pub use ior::{IiopProfile, Ior};
pub use types::{Position, PositionKey, PositionOrigin};
