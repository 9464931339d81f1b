use std::fmt;

use clap::ValueEnum;

use super::error::{BrokerError, Result};

/// Reference point of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PositionOrigin {
    /// From the start of the media
    #[default]
    Absolute,
    /// From the current position
    Relative,
    /// Wrapping around the media length
    Modulo,
}

/// Unit of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PositionKey {
    /// Bytes into the stream
    #[default]
    ByteCount,
    /// Decoded samples
    SampleCount,
    /// Milliseconds of media time
    MediaTime,
}

/// Position reported by the media control object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Reference point
    pub origin: PositionOrigin,
    /// Unit
    pub key: PositionKey,
    /// Offset in `key` units
    pub value: i64,
}

impl PositionOrigin {
    /// Wire code.
    pub fn code(self) -> u32 {
        match self {
            Self::Absolute => 0,
            Self::Relative => 1,
            Self::Modulo => 2,
        }
    }
}

impl TryFrom<u32> for PositionOrigin {
    type Error = BrokerError;

    fn try_from(code: u32) -> Result<Self> {
        match code {
            0 => Ok(Self::Absolute),
            1 => Ok(Self::Relative),
            2 => Ok(Self::Modulo),
            other => Err(BrokerError::Malformed(format!("unknown position origin {other}"))),
        }
    }
}

impl PositionKey {
    /// Wire code.
    pub fn code(self) -> u32 {
        match self {
            Self::ByteCount => 0,
            Self::SampleCount => 1,
            Self::MediaTime => 2,
        }
    }
}

impl TryFrom<u32> for PositionKey {
    type Error = BrokerError;

    fn try_from(code: u32) -> Result<Self> {
        match code {
            0 => Ok(Self::ByteCount),
            1 => Ok(Self::SampleCount),
            2 => Ok(Self::MediaTime),
            other => Err(BrokerError::Malformed(format!("unknown position key {other}"))),
        }
    }
}

impl fmt::Display for PositionOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute => write!(f, "absolute"),
            Self::Relative => write!(f, "relative"),
            Self::Modulo => write!(f, "modulo"),
        }
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByteCount => write!(f, "byte-count"),
            Self::SampleCount => write!(f, "sample-count"),
            Self::MediaTime => write!(f, "media-time"),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "origin={} key={} value={}",
            self.origin, self.key, self.value
        )
    }
}
