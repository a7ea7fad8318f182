//! Repository for the `tracks` table.
//!
//! Reads that feed API responses join `artists` so each row carries its
//! artist's display columns without a second lookup.

use prsk_core::pagination::PageRequest;
use prsk_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::track::{NewTrack, Track, TrackWithArtist, UpdateTrack};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, artist_id, music_type, specially, lyrics_name, music_name, \
    featuring, youtube_link, created_at, created_by, updated_at, updated_by, is_deleted";

/// Track columns qualified by `t`, plus the joined artist columns.
const JOINED_COLUMNS: &str = "t.id, t.title, t.artist_id, t.music_type, t.specially, \
    t.lyrics_name, t.music_name, t.featuring, t.youtube_link, \
    t.created_at, t.created_by, t.updated_at, t.updated_by, t.is_deleted, \
    a.artist_name, a.unit_name AS artist_unit_name, a.content AS artist_content, \
    a.is_deleted AS artist_is_deleted";

/// Provides CRUD operations for tracks.
pub struct TrackRepo;

impl TrackRepo {
    /// Insert a new track, returning the created row.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &NewTrack,
        actor: &str,
    ) -> Result<Track, sqlx::Error> {
        let query = format!(
            "INSERT INTO tracks
                (title, artist_id, music_type, specially, lyrics_name, music_name,
                 featuring, youtube_link, created_by, updated_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(&input.title)
            .bind(input.artist_id)
            .bind(input.music_type.code())
            .bind(input.specially)
            .bind(&input.lyrics_name)
            .bind(&input.music_name)
            .bind(&input.featuring)
            .bind(&input.youtube_link)
            .bind(actor)
            .fetch_one(executor)
            .await
    }

    /// Find a track by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE id = $1 AND NOT is_deleted");
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a track by ID, including soft-deleted rows.
    pub async fn find_by_id_include_deleted(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE id = $1");
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a live track together with its artist columns.
    pub async fn find_with_artist(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<TrackWithArtist>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM tracks t
             JOIN artists a ON a.id = t.artist_id
             WHERE t.id = $1 AND NOT t.is_deleted"
        );
        sqlx::query_as::<_, TrackWithArtist>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find the live track holding the `(title, music_type)` key, if any.
    pub async fn find_by_title_and_music_type(
        executor: impl PgExecutor<'_>,
        title: &str,
        music_type: i16,
    ) -> Result<Option<Track>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tracks
             WHERE title = $1 AND music_type = $2 AND NOT is_deleted"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(title)
            .bind(music_type)
            .fetch_optional(executor)
            .await
    }

    /// List one page of live tracks ordered by title, then ID, with their artists.
    ///
    /// Tracks whose artist was soft-deleted are still listed; the caller
    /// decides how to present the missing artist.
    pub async fn list_page(
        executor: impl PgExecutor<'_>,
        page: PageRequest,
    ) -> Result<Vec<TrackWithArtist>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM tracks t
             JOIN artists a ON a.id = t.artist_id
             WHERE NOT t.is_deleted
             ORDER BY t.title ASC, t.id ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, TrackWithArtist>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(executor)
            .await
    }

    /// Count live tracks.
    pub async fn count(executor: impl PgExecutor<'_>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM tracks WHERE NOT is_deleted")
            .fetch_one(executor)
            .await
    }

    /// Update a track. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        executor: impl PgExecutor<'_>,
        id: DbId,
        input: &UpdateTrack,
        actor: &str,
    ) -> Result<Option<Track>, sqlx::Error> {
        let query = format!(
            "UPDATE tracks SET
                title = COALESCE($2, title),
                artist_id = COALESCE($3, artist_id),
                music_type = COALESCE($4, music_type),
                specially = COALESCE($5, specially),
                lyrics_name = COALESCE($6, lyrics_name),
                music_name = COALESCE($7, music_name),
                featuring = COALESCE($8, featuring),
                youtube_link = COALESCE($9, youtube_link),
                updated_at = NOW(),
                updated_by = $10
             WHERE id = $1 AND NOT is_deleted
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.artist_id)
            .bind(input.music_type)
            .bind(input.specially)
            .bind(&input.lyrics_name)
            .bind(&input.music_name)
            .bind(&input.featuring)
            .bind(&input.youtube_link)
            .bind(actor)
            .fetch_optional(executor)
            .await
    }

    /// Soft-delete a track by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(
        executor: impl PgExecutor<'_>,
        id: DbId,
        actor: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE tracks SET is_deleted = TRUE, updated_at = NOW(), updated_by = $2
             WHERE id = $1 AND NOT is_deleted",
        )
        .bind(id)
        .bind(actor)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
