mod mocks;

use std::{path::Path, sync::Arc, time::Duration};

use futures::StreamExt;
use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    time::sleep,
};

use self::mocks::{MockPlayer, MockTrackList};
use super::{
    Action, Controller, Expander, RefreshTimer, ToggleIcon, WindowCommand, WindowLifecycle,
    WindowPosition, actor,
};
use crate::{config::PlayerConfig, services::player::TrackMetadata};

struct Harness {
    controller: Controller<MockPlayer, MockTrackList>,
    player: Arc<MockPlayer>,
    tracklist: Arc<MockTrackList>,
    _actions: UnboundedSender<Action>,
    _ticks: UnboundedReceiver<Action>,
}

fn harness(status: i32, metadata: Option<TrackMetadata>) -> Harness {
    let player = Arc::new(MockPlayer::new(status));
    let tracklist = Arc::new(MockTrackList::new(metadata));
    let (actions, ticks) = mpsc::unbounded_channel();
    let timer = RefreshTimer::new(Duration::from_secs(2), actions.downgrade());

    Harness {
        controller: Controller::new(Arc::clone(&player), Arc::clone(&tracklist), timer),
        player,
        tracklist,
        _actions: actions,
        _ticks: ticks,
    }
}

fn metadata(fields: &[(&str, &str)]) -> TrackMetadata {
    fields.iter().copied().collect()
}

async fn settle(controller: &Controller<MockPlayer, MockTrackList>) {
    while controller.dispatcher().pending() > 0 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn update_shows_artist_when_present() {
    let mut h = harness(
        2,
        Some(metadata(&[("artist", "Nina Simone"), ("URI", "file:///a.ogg")])),
    );

    h.controller.update().await.unwrap();

    assert_eq!(h.controller.state().display_text(), "Nina Simone");
    assert_eq!(h.controller.state().volume(), 64);
}

#[tokio::test]
async fn update_falls_back_to_uri_without_artist() {
    let mut h = harness(2, Some(metadata(&[("URI", "file:///a.ogg")])));

    h.controller.update().await.unwrap();

    assert_eq!(h.controller.state().display_text(), "file:///a.ogg");
}

#[tokio::test]
async fn update_falls_back_to_uri_with_empty_artist() {
    let mut h = harness(2, Some(metadata(&[("artist", ""), ("URI", "file:///b.ogg")])));

    h.controller.update().await.unwrap();

    assert_eq!(h.controller.state().display_text(), "file:///b.ogg");
}

#[tokio::test]
async fn update_clears_text_when_metadata_unavailable() {
    let mut h = harness(2, Some(metadata(&[("artist", "someone")])));
    h.controller.update().await.unwrap();

    let mut h2 = harness(2, None);
    h2.controller.update().await.unwrap();

    assert_eq!(h.controller.state().display_text(), "someone");
    assert_eq!(h2.controller.state().display_text(), "");
    assert!(h2.player.calls().contains(&"get_status"));
}

#[tokio::test]
async fn playing_status_selects_pause_icon() {
    let mut h = harness(0, None);

    h.controller.get_play_status().await.unwrap();

    assert!(h.controller.state().playing());
    assert_eq!(h.controller.state().toggle_icon(), ToggleIcon::Pause);
    assert!(h.controller.timer().is_running());
}

#[tokio::test]
async fn any_nonzero_status_selects_play_icon() {
    for code in [1, 2, 3, -1, 42] {
        let mut h = harness(code, None);

        h.controller.get_play_status().await.unwrap();

        assert!(!h.controller.state().playing(), "status {code}");
        assert_eq!(h.controller.state().toggle_icon(), ToggleIcon::Play);
        assert!(!h.controller.timer().is_running());
    }
}

#[tokio::test]
async fn add_track_without_input_makes_no_remote_calls() {
    let mut h = harness(2, None);

    h.controller.add_track(Some(""), None).await.unwrap();
    h.controller.add_track(None, None).await.unwrap();

    assert!(h.player.calls().is_empty());
    assert!(h.tracklist.calls().is_empty());
}

#[tokio::test]
async fn add_track_uses_text_regardless_of_chooser() {
    let mut h = harness(2, None);

    h.controller
        .add_track(Some("http://radio.example/stream"), Some(Path::new("/a/b")))
        .await
        .unwrap();

    assert_eq!(
        h.tracklist.added(),
        vec![("http://radio.example/stream".to_string(), true)]
    );
}

#[tokio::test]
async fn add_track_from_chooser_uses_directory_scheme() {
    let mut h = harness(2, None);

    h.controller
        .add_track(Some(""), Some(Path::new("/a/b")))
        .await
        .unwrap();

    assert_eq!(
        h.tracklist.added(),
        vec![("directory:///a/b".to_string(), true)]
    );
}

#[tokio::test]
async fn transport_commands_do_not_surface_failures() {
    let mut h = harness(2, Some(metadata(&[("URI", "file:///a.ogg")])));

    h.controller.next().await.unwrap();
    h.controller.prev().await.unwrap();
    h.controller.stop().await.unwrap();
    settle(&h.controller).await;

    assert_eq!(h.player.count("next"), 1);
    assert_eq!(h.player.count("prev"), 1);
    assert_eq!(h.player.count("stop"), 1);
    assert_eq!(h.player.count("get_status"), 3);
}

#[tokio::test]
async fn quit_clears_display_text() {
    let mut h = harness(2, Some(metadata(&[("artist", "someone")])));
    h.controller.update().await.unwrap();

    h.controller.quit();
    settle(&h.controller).await;

    assert_eq!(h.controller.state().display_text(), "");
    assert_eq!(h.player.count("quit"), 1);
}

#[tokio::test]
async fn slider_changes_update_state_and_player() {
    let mut h = harness(2, None);

    h.controller.set_volume(30);
    h.controller.set_position(500);
    settle(&h.controller).await;

    assert_eq!(h.controller.state().volume(), 30);
    assert_eq!(h.controller.state().position(), 500);
    assert_eq!(h.player.volume(), 30);
    assert_eq!(h.player.count("position_set"), 1);
}

#[tokio::test]
async fn toggle_pause_follows_remote_status() {
    let mut h = harness(1, None);

    h.controller.toggle_pause().await.unwrap();
    assert_eq!(h.controller.state().toggle_icon(), ToggleIcon::Pause);
    assert!(h.controller.timer().is_running());

    h.controller.toggle_pause().await.unwrap();
    assert_eq!(h.controller.state().toggle_icon(), ToggleIcon::Play);
    assert!(!h.controller.state().playing());
}

#[tokio::test]
async fn track_change_sets_text_and_arms_timer_only() {
    let mut h = harness(2, None);
    h.controller.get_play_status().await.unwrap();

    h.controller
        .on_track_change(&metadata(&[("artist", "Erik Satie")]));

    assert_eq!(h.controller.state().display_text(), "Erik Satie");
    assert_eq!(h.controller.state().toggle_icon(), ToggleIcon::Play);
    assert!(h.controller.timer().is_running());
}

#[tokio::test]
async fn refresh_stops_timer_once_not_playing() {
    let mut h = harness(0, None);
    h.player.set_position(250);
    h.controller.get_play_status().await.unwrap();

    h.controller.refresh_position().await.unwrap();
    assert_eq!(h.controller.state().position(), 250);
    assert!(h.controller.timer().is_running());

    h.player.set_status(1);
    h.controller.get_play_status().await.unwrap();
    assert!(h.controller.timer().is_running());

    h.controller.refresh_position().await.unwrap();
    assert!(!h.controller.timer().is_running());
}

#[tokio::test(start_paused = true)]
async fn refresh_timer_reschedules_while_playing_and_stops_after() {
    let player = Arc::new(MockPlayer::new(0));
    let tracklist = Arc::new(MockTrackList::new(None));
    let handle = actor::spawn(
        Arc::clone(&player),
        tracklist,
        &PlayerConfig::default(),
        None,
    );

    handle.send(Action::Update);
    sleep(Duration::from_millis(100)).await;
    assert!(handle.state().get().playing());

    sleep(Duration::from_secs(4)).await;
    assert_eq!(player.count("position_get"), 2);

    player.set_status(2);
    handle.send(Action::Update);
    sleep(Duration::from_millis(100)).await;
    assert!(!handle.state().get().playing());

    sleep(Duration::from_secs(2)).await;
    assert_eq!(player.count("position_get"), 3);

    sleep(Duration::from_secs(10)).await;
    assert_eq!(player.count("position_get"), 3);
}

#[tokio::test(start_paused = true)]
async fn track_changes_are_forwarded_to_the_actor() {
    let player = Arc::new(MockPlayer::new(2));
    let tracklist = Arc::new(MockTrackList::new(None));
    let changes = futures::stream::iter(vec![metadata(&[("URI", "file:///next.ogg")])]);
    let handle = actor::spawn(
        player,
        tracklist,
        &PlayerConfig::default(),
        Some(changes.boxed()),
    );

    sleep(Duration::from_millis(10)).await;

    assert_eq!(handle.state().get().display_text(), "file:///next.ogg");
}

#[test]
fn close_and_escape_hide_and_save_position() {
    let mut window = WindowLifecycle::new(true, true);
    let here = WindowPosition { x: 10, y: 20 };

    assert_eq!(window.close_requested(Some(here)), WindowCommand::Hide);
    assert!(!window.is_visible());
    assert_eq!(window.saved_position(), Some(here));

    assert_eq!(
        window.tray_activated(None),
        WindowCommand::Show { restore: Some(here) }
    );

    let there = WindowPosition { x: 300, y: 40 };
    assert_eq!(window.escape_pressed(Some(there)), WindowCommand::Hide);
    assert_eq!(
        window.tray_activated(None),
        WindowCommand::Show { restore: Some(there) }
    );
}

#[test]
fn tray_toggles_visibility() {
    let mut window = WindowLifecycle::new(false, true);

    assert_eq!(window.tray_activated(None), WindowCommand::Show { restore: None });
    assert!(window.is_visible());
    assert_eq!(window.tray_activated(None), WindowCommand::Hide);
    assert_eq!(window.saved_position(), None);
}

#[test]
fn without_tray_close_quits_and_escape_keeps_window() {
    let mut window = WindowLifecycle::new(true, false);
    let here = WindowPosition { x: 10, y: 20 };

    assert_eq!(window.escape_pressed(Some(here)), WindowCommand::Show { restore: None });
    assert!(window.is_visible());
    assert_eq!(window.saved_position(), None);

    assert_eq!(window.close_requested(Some(here)), WindowCommand::Quit);
    assert!(!window.is_visible());
}

#[test]
fn expander_label_tracks_state() {
    assert_eq!(Expander::toggled(true), "Less");
    assert_eq!(Expander::toggled(false), "More");
}
