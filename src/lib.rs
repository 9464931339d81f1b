//! mpremote - remote control clients for a media player.
//!
//! Two front-ends talk to a running player:
//!
//! - a desktop controller (window plus tray icon) and a scripted command
//!   line, both using the player's legacy `org.freedesktop.MediaPlayer`
//!   D-Bus interface;
//! - `broker-position`, which reads the player's published object reference
//!   and queries the media position over IIOP.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mpremote::{config::Config, services::player::{RemoteConnection, RemotePlayer}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load()?;
//! let remote = RemoteConnection::connect(&config.player).await?;
//! println!("status: {}", remote.player().get_status().await?);
//! # Ok(())
//! # }
//! ```

/// Command-line interface for scripted player control.
pub mod cli;

/// Configuration schema definitions and loading.
pub mod config;

/// Toolkit-agnostic controller of the player window.
pub mod controller;

/// Core error types and result aliases.
pub mod core;

/// Remote player and broker services.
pub mod services;

/// Logging setup.
pub mod tracing_config;

/// Desktop front-end.
pub mod ui;

/// Re-exported core types for convenience.
pub use crate::core::{MpRemoteError, Result};
