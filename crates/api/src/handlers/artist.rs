//! Handlers for the `/artists` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use prsk_core::pagination::Page;
use prsk_db::models::artist::{CreateArtist, ArtistResponse, UpdateArtist};

use crate::error::AppResult;
use crate::extract::{ResourceId, ValidatedJson, ValidatedQuery};
use crate::query::PageParams;
use crate::state::AppState;

/// GET /artists?page=&limit=
pub async fn list(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<PageParams>,
) -> AppResult<Json<Page<ArtistResponse>>> {
    let page = state.artists.list(params.to_page_request()?).await?;
    Ok(Json(page))
}

/// POST /artists
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateArtist>,
) -> AppResult<(StatusCode, Json<ArtistResponse>)> {
    let created = state.artists.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /artists/{id}
pub async fn update(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    ValidatedJson(input): ValidatedJson<UpdateArtist>,
) -> AppResult<Json<ArtistResponse>> {
    let updated = state.artists.update(id, input).await?;
    Ok(Json(updated))
}

/// DELETE /artists/{id}
pub async fn delete(State(state): State<AppState>, ResourceId(id): ResourceId) -> AppResult<StatusCode> {
    state.artists.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
