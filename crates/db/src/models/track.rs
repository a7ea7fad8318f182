//! Track (`prsk-music`) entity model and DTOs.
//!
//! A track references its artist by id. Listing resolves the artist in the
//! same query, producing [`TrackWithArtist`]; when the referenced artist has
//! since been soft-deleted the response falls back to `"Unknown"`.

use prsk_core::audit::AuditFields;
use prsk_core::error::CoreError;
use prsk_core::music_type::{MusicType, UnknownMusicType};
use prsk_core::types::DbId;
use prsk_core::validation::{known_music_type, not_blank};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Artist name shown for tracks whose artist was soft-deleted.
pub const UNKNOWN_ARTIST_NAME: &str = "Unknown";

/// A row from the `tracks` table.
#[derive(Debug, Clone, FromRow)]
pub struct Track {
    pub id: DbId,
    pub title: String,
    pub artist_id: DbId,
    pub music_type: i16,
    pub specially: Option<bool>,
    pub lyrics_name: Option<String>,
    pub music_name: Option<String>,
    pub featuring: Option<String>,
    pub youtube_link: String,
    #[sqlx(flatten)]
    pub audit: AuditFields,
    pub is_deleted: bool,
}

impl Track {
    /// Decode the stored music-type code.
    pub fn music_type(&self) -> Result<MusicType, UnknownMusicType> {
        MusicType::from_code(self.music_type)
    }
}

/// A track joined with the columns of its artist.
#[derive(Debug, Clone, FromRow)]
pub struct TrackWithArtist {
    #[sqlx(flatten)]
    pub track: Track,
    pub artist_name: String,
    pub artist_unit_name: Option<String>,
    pub artist_content: Option<String>,
    pub artist_is_deleted: bool,
}

/// DTO for creating a new track.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrack {
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "The music title is required."),
        length(
            max = 30,
            message = "Please enter the music title within 30 characters."
        )
    )]
    pub title: String,
    #[validate(required(message = "The artist id is required."))]
    pub artist_id: Option<DbId>,
    #[validate(
        required(message = "The music type is required."),
        custom(function = "known_music_type")
    )]
    pub music_type: Option<i16>,
    pub specially: Option<bool>,
    #[validate(length(max = 50, message = "Please enter the lyrics name within 50 characters."))]
    pub lyrics_name: Option<String>,
    #[validate(length(max = 50, message = "Please enter the music name within 50 characters."))]
    pub music_name: Option<String>,
    #[validate(length(max = 10, message = "Please enter the featuring within 10 characters."))]
    pub featuring: Option<String>,
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "The YouTube link is required."),
        length(
            max = 100,
            message = "Please enter the YouTube link within 100 characters."
        )
    )]
    pub youtube_link: String,
}

/// Validated insert payload: required codes resolved, music type decoded.
#[derive(Debug, Clone)]
pub struct NewTrack {
    pub title: String,
    pub artist_id: DbId,
    pub music_type: MusicType,
    pub specially: Option<bool>,
    pub lyrics_name: Option<String>,
    pub music_name: Option<String>,
    pub featuring: Option<String>,
    pub youtube_link: String,
}

impl TryFrom<CreateTrack> for NewTrack {
    type Error = CoreError;

    fn try_from(input: CreateTrack) -> Result<Self, Self::Error> {
        let artist_id = input
            .artist_id
            .ok_or_else(|| CoreError::invalid_field("artistId", "The artist id is required."))?;
        let code = input
            .music_type
            .ok_or_else(|| CoreError::invalid_field("musicType", "The music type is required."))?;
        Ok(Self {
            title: input.title,
            artist_id,
            music_type: MusicType::from_code(code)?,
            specially: input.specially,
            lyrics_name: input.lyrics_name,
            music_name: input.music_name,
            featuring: input.featuring,
            youtube_link: input.youtube_link,
        })
    }
}

/// DTO for updating an existing track. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrack {
    #[validate(
        custom(function = "not_blank", message = "The music title must not be blank."),
        length(
            max = 30,
            message = "Please enter the music title within 30 characters."
        )
    )]
    pub title: Option<String>,
    pub artist_id: Option<DbId>,
    #[validate(custom(function = "known_music_type"))]
    pub music_type: Option<i16>,
    pub specially: Option<bool>,
    #[validate(length(max = 50, message = "Please enter the lyrics name within 50 characters."))]
    pub lyrics_name: Option<String>,
    #[validate(length(max = 50, message = "Please enter the music name within 50 characters."))]
    pub music_name: Option<String>,
    #[validate(length(max = 10, message = "Please enter the featuring within 10 characters."))]
    pub featuring: Option<String>,
    #[validate(
        custom(function = "not_blank", message = "The YouTube link must not be blank."),
        length(
            max = 100,
            message = "Please enter the YouTube link within 100 characters."
        )
    )]
    pub youtube_link: Option<String>,
}

impl UpdateTrack {
    /// Decode the requested music type, if any.
    pub fn music_type(&self) -> Result<Option<MusicType>, UnknownMusicType> {
        self.music_type.map(MusicType::from_code).transpose()
    }
}

/// Track representation for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackResponse {
    pub id: DbId,
    pub title: String,
    pub artist_id: DbId,
    pub artist_name: String,
    pub unit_name: Option<String>,
    pub content: Option<String>,
    pub music_type: MusicType,
    pub specially: Option<bool>,
    pub lyrics_name: Option<String>,
    pub music_name: Option<String>,
    pub featuring: Option<String>,
    pub youtube_link: String,
    pub audit_info: AuditFields,
}

impl TryFrom<TrackWithArtist> for TrackResponse {
    type Error = CoreError;

    /// Fails only when the stored music-type code is unknown.
    fn try_from(row: TrackWithArtist) -> Result<Self, Self::Error> {
        let music_type = row.track.music_type().map_err(|e| {
            CoreError::Internal(format!("track {} has {e}", row.track.id))
        })?;

        let (artist_name, unit_name, content) = if row.artist_is_deleted {
            (UNKNOWN_ARTIST_NAME.to_string(), None, None)
        } else {
            (row.artist_name, row.artist_unit_name, row.artist_content)
        };

        let track = row.track;
        Ok(Self {
            id: track.id,
            title: track.title,
            artist_id: track.artist_id,
            artist_name,
            unit_name,
            content,
            music_type,
            specially: track.specially,
            lyrics_name: track.lyrics_name,
            music_name: track.music_name,
            featuring: track.featuring,
            youtube_link: track.youtube_link,
            audit_info: track.audit,
        })
    }
}
