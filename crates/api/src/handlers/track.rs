//! Handlers for the `/prsk-music` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use prsk_core::pagination::Page;
use prsk_db::models::track::{CreateTrack, TrackResponse, UpdateTrack};

use crate::error::AppResult;
use crate::extract::{ResourceId, ValidatedJson, ValidatedQuery};
use crate::query::PageParams;
use crate::state::AppState;

/// GET /prsk-music?page=&limit=
pub async fn list(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<PageParams>,
) -> AppResult<Json<Page<TrackResponse>>> {
    let page = state.tracks.list(params.to_page_request()?).await?;
    Ok(Json(page))
}

/// POST /prsk-music
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTrack>,
) -> AppResult<(StatusCode, Json<TrackResponse>)> {
    let created = state.tracks.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /prsk-music/{id}
pub async fn update(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    ValidatedJson(input): ValidatedJson<UpdateTrack>,
) -> AppResult<Json<TrackResponse>> {
    let updated = state.tracks.update(id, input).await?;
    Ok(Json(updated))
}

/// DELETE /prsk-music/{id}
pub async fn delete(State(state): State<AppState>, ResourceId(id): ResourceId) -> AppResult<StatusCode> {
    state.tracks.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
