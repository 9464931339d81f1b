/// Icon shown on the play/pause toggle button
///
/// The toggle offers the opposite of the current status: a pause icon
/// while playing, a play icon otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleIcon {
    /// Player is paused or stopped
    #[default]
    Play,

    /// Player is playing
    Pause,
}

impl ToggleIcon {
    /// Freedesktop icon name for this state.
    pub fn icon_name(self) -> &'static str {
        match self {
            Self::Play => "media-playback-start",
            Self::Pause => "media-playback-pause",
        }
    }
}

/// Local mirror of the remote player shown in the window
///
/// Only the controller mutates it, either while synchronizing with the
/// player or when applying direct user input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiState {
    display_text: String,
    toggle_icon: ToggleIcon,
    volume: i32,
    position: i32,
    playing: bool,
}

impl UiState {
    /// Text describing the current item.
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// Icon of the play/pause toggle.
    pub fn toggle_icon(&self) -> ToggleIcon {
        self.toggle_icon
    }

    /// Volume slider value.
    pub fn volume(&self) -> i32 {
        self.volume
    }

    /// Position slider value.
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Whether the last fetched status said the player is playing.
    pub fn playing(&self) -> bool {
        self.playing
    }

    pub(crate) fn set_display_text(&mut self, text: impl Into<String>) {
        self.display_text = text.into();
    }

    pub(crate) fn set_volume(&mut self, volume: i32) {
        self.volume = volume;
    }

    pub(crate) fn set_position(&mut self, position: i32) {
        self.position = position;
    }

    /// Record whether the player is playing; the toggle icon follows.
    pub(crate) fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
        self.toggle_icon = if playing {
            ToggleIcon::Pause
        } else {
            ToggleIcon::Play
        };
    }
}
