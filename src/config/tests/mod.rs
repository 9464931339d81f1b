//! Unit tests for config module
//!
//! Tests configuration types, defaults, and serialization.
//! No filesystem dependencies - all in-memory.

#![allow(clippy::panic)]

use std::{path::PathBuf, time::Duration};

use crate::config::{Config, LogLevel};

#[test]
fn config_default_matches_player_defaults() {
    let config = Config::default();

    assert_eq!(config.player.bus_name, "org.freedesktop.MediaPlayer");
    assert_eq!(config.player.refresh_interval(), Duration::from_secs(2));
    assert_eq!(config.library.directory, PathBuf::from("/media/mp3"));
    assert_eq!(config.broker.ior_file, PathBuf::from("/tmp/vlc-ior.ref"));
    assert_eq!(config.ui.icon_name, "vlc");
    assert_eq!(config.general.log_level, LogLevel::Info);
}

#[test]
fn config_serialize_toml() {
    let config = Config::default();

    let toml_str = config.to_toml_string().unwrap();
    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("[player]"));
    assert!(toml_str.contains("[library]"));
    assert!(toml_str.contains("[broker]"));
}

#[test]
fn config_deserialize_partial_section() {
    let toml_str = r#"
        [general]
        log_level = "debug"

        [player]
        refresh_interval_ms = 500
    "#;

    let config = Config::from_toml_str(toml_str).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.player.refresh_interval(), Duration::from_millis(500));
    assert_eq!(config.player.bus_name, "org.freedesktop.MediaPlayer");
}

#[test]
fn config_empty_toml() {
    let config = Config::from_toml_str("").unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn config_rejects_unknown_log_level() {
    let toml_str = r#"
        [general]
        log_level = "chatty"
    "#;

    assert!(Config::from_toml_str(toml_str).is_err());
}

#[test]
fn zero_refresh_interval_is_clamped() {
    let config = Config::from_toml_str("[player]\nrefresh_interval_ms = 0\n").unwrap();

    assert_eq!(config.player.refresh_interval(), Duration::from_millis(1));
}

#[test]
fn missing_library_directory_is_reported_as_none() {
    let config = Config::from_toml_str("[library]\ndirectory = \"/definitely/not/a/library\"\n")
        .unwrap();

    assert!(config.library.existing_directory().is_none());
}

#[test]
fn log_level_display() {
    assert_eq!(LogLevel::Error.to_string(), "error");
    assert_eq!(LogLevel::Warn.to_string(), "warn");
    assert_eq!(LogLevel::Trace.to_string(), "trace");
}
