use std::fmt;

/// Upper bound of the volume the player reports, in percent.
pub const VOLUME_MAX: i32 = 100;

/// Upper bound of the position the player reports (per-mille of the item).
pub const POSITION_MAX: i32 = 1000;

/// Playback status decoded from the player's integer status code
///
/// Only code `0` means playing. Codes outside the known set are kept as
/// they are; the player owns their meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// Code 0
    Playing,

    /// Code 1
    Paused,

    /// Code 2
    Stopped,

    /// Any other code
    Unknown(i32),
}

impl PlaybackStatus {
    /// Whether the player is currently playing.
    pub fn is_playing(self) -> bool {
        self == Self::Playing
    }

    /// The raw status code.
    pub fn code(self) -> i32 {
        match self {
            Self::Playing => 0,
            Self::Paused => 1,
            Self::Stopped => 2,
            Self::Unknown(code) => code,
        }
    }
}

impl From<i32> for PlaybackStatus {
    fn from(code: i32) -> Self {
        match code {
            0 => Self::Playing,
            1 => Self::Paused,
            2 => Self::Stopped,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => write!(f, "Playing"),
            Self::Paused => write!(f, "Paused"),
            Self::Stopped => write!(f, "Stopped"),
            Self::Unknown(code) => write!(f, "Unknown ({code})"),
        }
    }
}
