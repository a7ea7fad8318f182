use prsk_core::error::CoreError;
use prsk_core::pagination::{Page, PageRequest};
use prsk_core::patch::{changed, conflicts_with, patched};
use prsk_core::types::DbId;
use prsk_db::models::track::{CreateTrack, NewTrack, TrackResponse, UpdateTrack};
use prsk_db::repositories::{ArtistRepo, TrackRepo};
use sqlx::{PgConnection, PgPool};

use crate::error::{AppError, AppResult};

const ENTITY: &str = "Prsk music";

fn key_conflict() -> CoreError {
    CoreError::conflict(
        "Title and MusicType",
        "Duplicate title and music type combination.",
    )
}

/// Require `artist_id` to name a live artist.
async fn ensure_artist(conn: &mut PgConnection, artist_id: DbId) -> AppResult<()> {
    match ArtistRepo::find_by_id(conn, artist_id).await? {
        Some(_) => Ok(()),
        None => Err(CoreError::NotFound {
            entity: "Artist",
            id: artist_id,
        }
        .into()),
    }
}

/// Re-read a just-written track with its artist columns for the response.
async fn load_response(conn: &mut PgConnection, id: DbId) -> AppResult<TrackResponse> {
    let row = TrackRepo::find_with_artist(conn, id)
        .await?
        .ok_or_else(|| AppError::InternalError(format!("track {id} vanished after write")))?;
    Ok(TrackResponse::try_from(row)?)
}

/// Create, list, update and soft-delete tracks (`prsk-music`).
pub struct TrackService {
    pool: PgPool,
    actor: String,
}

impl TrackService {
    pub fn new(pool: PgPool, actor: String) -> Self {
        Self { pool, actor }
    }

    /// One page of live tracks ordered by title, artists resolved in the same query.
    pub async fn list(&self, page: PageRequest) -> AppResult<Page<TrackResponse>> {
        let rows = TrackRepo::list_page(&self.pool, page).await?;
        let total = TrackRepo::count(&self.pool).await?;
        Ok(Page::new(rows, page, total).try_map(TrackResponse::try_from)?)
    }

    pub async fn create(&self, input: CreateTrack) -> AppResult<TrackResponse> {
        let input = NewTrack::try_from(input)?;
        let mut tx = self.pool.begin().await?;

        let duplicate =
            TrackRepo::find_by_title_and_music_type(&mut *tx, &input.title, input.music_type.code())
                .await?;
        if duplicate.is_some() {
            tracing::debug!(title = %input.title, music_type = input.music_type.code(), "Track key taken");
            return Err(key_conflict().into());
        }

        ensure_artist(&mut tx, input.artist_id).await?;

        let track = TrackRepo::create(&mut *tx, &input, &self.actor).await?;
        let response = load_response(&mut tx, track.id).await?;
        tx.commit().await?;

        tracing::info!(track_id = track.id, artist_id = track.artist_id, "Track created");
        Ok(response)
    }

    /// Apply the provided fields to a live track.
    ///
    /// The `(title, musicType)` key is checked against the combined new key,
    /// with unchanged components keeping their current values.
    pub async fn update(&self, id: DbId, input: UpdateTrack) -> AppResult<TrackResponse> {
        let new_music_type = input.music_type().map_err(CoreError::from)?;
        let mut tx = self.pool.begin().await?;

        let current = TrackRepo::find_by_id(&mut *tx, id)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        let new_code = new_music_type.map(|t| t.code());
        let key_changed = changed(input.title.as_deref(), current.title.as_str())
            || changed(new_code.as_ref(), &current.music_type);

        if key_changed {
            let title = patched(input.title.as_deref(), current.title.as_str());
            let code = *patched(new_code.as_ref(), &current.music_type);
            let holder = TrackRepo::find_by_title_and_music_type(&mut *tx, title, code).await?;
            if conflicts_with(holder.map(|t| t.id), id) {
                tracing::debug!(track_id = id, title, music_type = code, "Track key taken");
                return Err(key_conflict().into());
            }
        }

        if let Some(artist_id) = input.artist_id {
            ensure_artist(&mut tx, artist_id).await?;
        }

        TrackRepo::update(&mut *tx, id, &input, &self.actor)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        let response = load_response(&mut tx, id).await?;
        tx.commit().await?;

        tracing::info!(track_id = id, "Track updated");
        Ok(response)
    }

    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;
        if !TrackRepo::soft_delete(&mut *tx, id, &self.actor).await? {
            return Err(CoreError::NotFound { entity: ENTITY, id }.into());
        }
        tx.commit().await?;

        tracing::info!(track_id = id, "Track deleted");
        Ok(())
    }
}
