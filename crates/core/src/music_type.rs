//! Track music-type code table.
//!
//! Stored as SMALLINT and exchanged on the wire as a bare integer. Decoding
//! an unknown code is always an error; there is no fallback variant.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Kind of music video a track entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i16", try_from = "i16")]
pub enum MusicType {
    Original,
    ThreeDMv,
    TwoDMv,
}

/// Returned when a code does not correspond to any [`MusicType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid MusicType: {0}")]
pub struct UnknownMusicType(pub i16);

impl MusicType {
    pub const ALL: [MusicType; 3] = [Self::Original, Self::ThreeDMv, Self::TwoDMv];

    pub fn code(self) -> i16 {
        match self {
            Self::Original => 0,
            Self::ThreeDMv => 1,
            Self::TwoDMv => 2,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Original => "オリジナル",
            Self::ThreeDMv => "3DMV",
            Self::TwoDMv => "2DMV",
        }
    }

    pub fn from_code(code: i16) -> Result<Self, UnknownMusicType> {
        Self::ALL
            .into_iter()
            .find(|t| t.code() == code)
            .ok_or(UnknownMusicType(code))
    }
}

impl From<MusicType> for i16 {
    fn from(value: MusicType) -> Self {
        value.code()
    }
}

impl TryFrom<i16> for MusicType {
    type Error = UnknownMusicType;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<UnknownMusicType> for CoreError {
    fn from(err: UnknownMusicType) -> Self {
        CoreError::invalid_field("musicType", err.to_string())
    }
}
