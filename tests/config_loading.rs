//! Integration tests for configuration loading.

#![allow(unsafe_code)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::{fs, path::PathBuf};

use mpremote::{
    MpRemoteError,
    config::{Config, ConfigPaths, LogLevel},
};
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

mod from_file {
    use super::*;

    #[test]
    fn loads_every_section() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[general]
log_level = "debug"

[player]
bus_name = "org.freedesktop.MediaPlayer.test"
refresh_interval_ms = 500

[library]
directory = "/srv/music"

[ui]
title = "Remote"
icon_name = "multimedia-player"

[broker]
ior_file = "/run/player.ior"
"#,
        );

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.general.log_level, LogLevel::Debug);
        assert_eq!(config.player.bus_name, "org.freedesktop.MediaPlayer.test");
        assert_eq!(config.player.refresh_interval().as_millis(), 500);
        assert_eq!(config.library.directory, PathBuf::from("/srv/music"));
        assert_eq!(config.ui.title, "Remote");
        assert_eq!(config.ui.icon_name, "multimedia-player");
        assert_eq!(config.broker.ior_file, PathBuf::from("/run/player.ior"));
    }

    #[test]
    fn omitted_fields_keep_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[player]\nrefresh_interval_ms = 1000\n");

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.player.refresh_interval_ms, 1000);
        assert_eq!(config.player.bus_name, "org.freedesktop.MediaPlayer");
        assert_eq!(config.broker, Config::default().broker);
        assert_eq!(config.ui, Config::default().ui);
    }

    #[test]
    fn parse_errors_name_the_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[player\nbus_name = 1");

        let error = Config::load_from(&path).unwrap_err();

        match error {
            MpRemoteError::TomlParseError { location, .. } => {
                assert!(location.ends_with("config.toml"), "{location}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();

        let error = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();

        assert!(matches!(error, MpRemoteError::IoError { .. }));
    }

    #[test]
    fn written_config_loads_back() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.player.refresh_interval_ms = 250;
        config.general.log_level = LogLevel::Trace;

        let path = write_config(&dir, &config.to_toml_string().unwrap());

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }
}

mod from_environment {
    use super::*;

    #[test]
    fn main_config_follows_xdg_then_home() {
        let home = TempDir::new().unwrap();
        let xdg = TempDir::new().unwrap();

        unsafe {
            std::env::remove_var("XDG_CONFIG_HOME");
            std::env::set_var("HOME", home.path());
        }
        assert_eq!(
            ConfigPaths::config_dir().unwrap(),
            home.path().join(".config/mpremote")
        );
        assert_eq!(Config::load().unwrap(), Config::default());

        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", xdg.path());
        }
        let config_dir = xdg.path().join("mpremote");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(
            config_dir.join("config.toml"),
            "[general]\nlog_level = \"error\"\n",
        )
        .unwrap();

        assert_eq!(ConfigPaths::main_config().unwrap(), config_dir.join("config.toml"));
        assert_eq!(Config::load().unwrap().general.log_level, LogLevel::Error);
    }
}
