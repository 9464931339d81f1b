use std::sync::{
    Mutex,
    atomic::{AtomicI32, Ordering},
};

use async_trait::async_trait;

use crate::services::player::{
    PlaybackStatus, PlayerError, RemotePlayer, RemoteTrackList, TrackMetadata,
};

/// Records every call and answers from settable values.
pub struct MockPlayer {
    calls: Mutex<Vec<&'static str>>,
    status: AtomicI32,
    volume: AtomicI32,
    position: AtomicI32,
}

impl MockPlayer {
    pub fn new(status: i32) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            status: AtomicI32::new(status),
            volume: AtomicI32::new(64),
            position: AtomicI32::new(0),
        }
    }

    pub fn set_status(&self, status: i32) {
        self.status.store(status, Ordering::SeqCst);
    }

    pub fn set_position(&self, position: i32) {
        self.position.store(position, Ordering::SeqCst);
    }

    pub fn volume(&self) -> i32 {
        self.volume.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls().iter().filter(|call| **call == name).count()
    }

    fn record(&self, name: &'static str) {
        self.calls.lock().unwrap().push(name);
    }
}

#[async_trait]
impl RemotePlayer for MockPlayer {
    async fn play(&self) -> Result<(), PlayerError> {
        self.record("play");
        self.set_status(0);
        Ok(())
    }

    async fn pause(&self) -> Result<(), PlayerError> {
        self.record("pause");
        let next = if self.status.load(Ordering::SeqCst) == 0 { 1 } else { 0 };
        self.set_status(next);
        Ok(())
    }

    async fn stop(&self) -> Result<(), PlayerError> {
        self.record("stop");
        Ok(())
    }

    async fn next(&self) -> Result<(), PlayerError> {
        self.record("next");
        Ok(())
    }

    async fn prev(&self) -> Result<(), PlayerError> {
        self.record("prev");
        Err(PlayerError::ControlFailed("Prev failed: at start".to_string()))
    }

    async fn quit(&self) -> Result<(), PlayerError> {
        self.record("quit");
        Ok(())
    }

    async fn volume_get(&self) -> Result<i32, PlayerError> {
        self.record("volume_get");
        Ok(self.volume())
    }

    async fn volume_set(&self, volume: i32) -> Result<(), PlayerError> {
        self.record("volume_set");
        self.volume.store(volume, Ordering::SeqCst);
        Ok(())
    }

    async fn position_get(&self) -> Result<i32, PlayerError> {
        self.record("position_get");
        Ok(self.position.load(Ordering::SeqCst))
    }

    async fn position_set(&self, position: i32) -> Result<(), PlayerError> {
        self.record("position_set");
        self.set_position(position);
        Ok(())
    }

    async fn get_status(&self) -> Result<PlaybackStatus, PlayerError> {
        self.record("get_status");
        Ok(PlaybackStatus::from(self.status.load(Ordering::SeqCst)))
    }

    async fn get_metadata(&self) -> Result<TrackMetadata, PlayerError> {
        self.record("get_metadata");
        Ok(TrackMetadata::default())
    }
}

/// Playlist double; `metadata` of `None` makes metadata lookups fail.
pub struct MockTrackList {
    calls: Mutex<Vec<&'static str>>,
    added: Mutex<Vec<(String, bool)>>,
    metadata: Mutex<Option<TrackMetadata>>,
}

impl MockTrackList {
    pub fn new(metadata: Option<TrackMetadata>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            added: Mutex::new(Vec::new()),
            metadata: Mutex::new(metadata),
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn added(&self) -> Vec<(String, bool)> {
        self.added.lock().unwrap().clone()
    }

    fn record(&self, name: &'static str) {
        self.calls.lock().unwrap().push(name);
    }
}

#[async_trait]
impl RemoteTrackList for MockTrackList {
    async fn add_track(&self, uri: &str, play_immediately: bool) -> Result<(), PlayerError> {
        self.record("add_track");
        self.added
            .lock()
            .unwrap()
            .push((uri.to_string(), play_immediately));
        Ok(())
    }

    async fn get_current_track(&self) -> Result<i32, PlayerError> {
        self.record("get_current_track");
        Ok(0)
    }

    async fn get_metadata(&self, _track: i32) -> Result<TrackMetadata, PlayerError> {
        self.record("get_metadata");
        self.metadata
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| PlayerError::ControlFailed("no such track".to_string()))
    }

    async fn get_length(&self) -> Result<i32, PlayerError> {
        self.record("get_length");
        Ok(1)
    }

    async fn del_track(&self, _track: i32) -> Result<(), PlayerError> {
        self.record("del_track");
        Ok(())
    }

    async fn set_loop(&self, _enabled: bool) -> Result<(), PlayerError> {
        self.record("set_loop");
        Ok(())
    }

    async fn set_repeat(&self, _enabled: bool) -> Result<(), PlayerError> {
        self.record("set_repeat");
        Ok(())
    }

    async fn set_random(&self, _enabled: bool) -> Result<(), PlayerError> {
        self.record("set_random");
        Ok(())
    }
}
