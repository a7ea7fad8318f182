//! Repository for the `artists` table.

use prsk_core::pagination::PageRequest;
use prsk_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::artist::{Artist, CreateArtist, UpdateArtist};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, artist_name, unit_name, content, \
    created_at, created_by, updated_at, updated_by, is_deleted";

/// Provides CRUD operations for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, returning the created row.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &CreateArtist,
        actor: &str,
    ) -> Result<Artist, sqlx::Error> {
        let query = format!(
            "INSERT INTO artists (artist_name, unit_name, content, created_by, updated_by)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(&input.artist_name)
            .bind(&input.unit_name)
            .bind(&input.content)
            .bind(actor)
            .fetch_one(executor)
            .await
    }

    /// Find an artist by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1 AND NOT is_deleted");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find an artist by ID, including soft-deleted rows.
    pub async fn find_by_id_include_deleted(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find the live artist holding `artist_name`, if any.
    pub async fn find_by_name(
        executor: impl PgExecutor<'_>,
        artist_name: &str,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM artists WHERE artist_name = $1 AND NOT is_deleted"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(artist_name)
            .fetch_optional(executor)
            .await
    }

    /// List one page of live artists ordered by name, then ID.
    pub async fn list_page(
        executor: impl PgExecutor<'_>,
        page: PageRequest,
    ) -> Result<Vec<Artist>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM artists
             WHERE NOT is_deleted
             ORDER BY artist_name ASC, id ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(executor)
            .await
    }

    /// Count live artists.
    pub async fn count(executor: impl PgExecutor<'_>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM artists WHERE NOT is_deleted")
            .fetch_one(executor)
            .await
    }

    /// Update an artist. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        executor: impl PgExecutor<'_>,
        id: DbId,
        input: &UpdateArtist,
        actor: &str,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!(
            "UPDATE artists SET
                artist_name = COALESCE($2, artist_name),
                unit_name = COALESCE($3, unit_name),
                content = COALESCE($4, content),
                updated_at = NOW(),
                updated_by = $5
             WHERE id = $1 AND NOT is_deleted
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.artist_name)
            .bind(&input.unit_name)
            .bind(&input.content)
            .bind(actor)
            .fetch_optional(executor)
            .await
    }

    /// Soft-delete an artist by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(
        executor: impl PgExecutor<'_>,
        id: DbId,
        actor: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE artists SET is_deleted = TRUE, updated_at = NOW(), updated_by = $2
             WHERE id = $1 AND NOT is_deleted",
        )
        .bind(id)
        .bind(actor)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
