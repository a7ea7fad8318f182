use prsk_core::error::CoreError;
use prsk_core::pagination::{Page, PageRequest};
use prsk_core::patch::{changed, conflicts_with};
use prsk_core::types::DbId;
use prsk_db::models::artist::{ArtistResponse, CreateArtist, UpdateArtist};
use prsk_db::repositories::ArtistRepo;
use sqlx::PgPool;

use crate::error::AppResult;

const ENTITY: &str = "Artist";

fn name_conflict(artist_name: &str) -> CoreError {
    CoreError::conflict(
        "artistName",
        format!("Artist name already exist: {artist_name}"),
    )
}

/// Create, list, update and soft-delete artists.
pub struct ArtistService {
    pool: PgPool,
    actor: String,
}

impl ArtistService {
    pub fn new(pool: PgPool, actor: String) -> Self {
        Self { pool, actor }
    }

    /// One page of live artists ordered by name.
    pub async fn list(&self, page: PageRequest) -> AppResult<Page<ArtistResponse>> {
        let rows = ArtistRepo::list_page(&self.pool, page).await?;
        let total = ArtistRepo::count(&self.pool).await?;
        Ok(Page::new(rows, page, total).map(ArtistResponse::from))
    }

    pub async fn create(&self, input: CreateArtist) -> AppResult<ArtistResponse> {
        let mut tx = self.pool.begin().await?;

        if ArtistRepo::find_by_name(&mut *tx, &input.artist_name)
            .await?
            .is_some()
        {
            tracing::debug!(artist_name = %input.artist_name, "Artist name taken");
            return Err(name_conflict(&input.artist_name).into());
        }

        let artist = ArtistRepo::create(&mut *tx, &input, &self.actor).await?;
        tx.commit().await?;

        tracing::info!(artist_id = artist.id, "Artist created");
        Ok(artist.into())
    }

    /// Apply the provided fields to a live artist.
    pub async fn update(&self, id: DbId, input: UpdateArtist) -> AppResult<ArtistResponse> {
        let mut tx = self.pool.begin().await?;

        let current = ArtistRepo::find_by_id(&mut *tx, id)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        if let Some(new_name) = input.artist_name.as_deref() {
            if changed(Some(new_name), current.artist_name.as_str()) {
                let holder = ArtistRepo::find_by_name(&mut *tx, new_name).await?;
                if conflicts_with(holder.map(|a| a.id), id) {
                    tracing::debug!(artist_id = id, artist_name = %new_name, "Artist name taken");
                    return Err(name_conflict(new_name).into());
                }
            }
        }

        let artist = ArtistRepo::update(&mut *tx, id, &input, &self.actor)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        tx.commit().await?;

        tracing::info!(artist_id = id, "Artist updated");
        Ok(artist.into())
    }

    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;
        if !ArtistRepo::soft_delete(&mut *tx, id, &self.actor).await? {
            return Err(CoreError::NotFound { entity: ENTITY, id }.into());
        }
        tx.commit().await?;

        tracing::info!(artist_id = id, "Artist deleted");
        Ok(())
    }
}
