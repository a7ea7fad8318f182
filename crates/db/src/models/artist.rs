//! Artist entity model and DTOs.

use prsk_core::audit::AuditFields;
use prsk_core::types::DbId;
use prsk_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `artists` table.
#[derive(Debug, Clone, FromRow)]
pub struct Artist {
    pub id: DbId,
    pub artist_name: String,
    pub unit_name: Option<String>,
    pub content: Option<String>,
    #[sqlx(flatten)]
    pub audit: AuditFields,
    pub is_deleted: bool,
}

/// DTO for creating a new artist.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateArtist {
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "The artist name is required."),
        length(
            max = 50,
            message = "Please enter the artist name within 50 characters."
        )
    )]
    pub artist_name: String,
    #[validate(length(max = 25, message = "Please enter the unit name within 25 characters."))]
    pub unit_name: Option<String>,
    #[validate(length(max = 20, message = "Please enter the content within 20 characters."))]
    pub content: Option<String>,
}

/// DTO for updating an existing artist. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArtist {
    #[validate(
        custom(function = "not_blank", message = "The artist name must not be blank."),
        length(
            max = 50,
            message = "Please enter the artist name within 50 characters."
        )
    )]
    pub artist_name: Option<String>,
    #[validate(length(max = 25, message = "Please enter the unit name within 25 characters."))]
    pub unit_name: Option<String>,
    #[validate(length(max = 20, message = "Please enter the content within 20 characters."))]
    pub content: Option<String>,
}

/// Artist representation for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistResponse {
    pub id: DbId,
    pub artist_name: String,
    pub unit_name: Option<String>,
    pub content: Option<String>,
    pub audit_info: AuditFields,
}

impl From<Artist> for ArtistResponse {
    fn from(artist: Artist) -> Self {
        Self {
            id: artist.id,
            artist_name: artist.artist_name,
            unit_name: artist.unit_name,
            content: artist.content,
            audit_info: artist.audit,
        }
    }
}
