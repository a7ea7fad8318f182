//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use prsk_core::pagination::Page;
use prsk_db::models::user::{CreateUserRequest, UserResponse, UpdateUserRequest};

use crate::error::AppResult;
use crate::extract::{ResourceId, ValidatedJson, ValidatedQuery};
use crate::query::PageParams;
use crate::state::AppState;

/// GET /users?page=&limit=
pub async fn list(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<PageParams>,
) -> AppResult<Json<Page<UserResponse>>> {
    let page = state.users.list(params.to_page_request()?).await?;
    Ok(Json(page))
}

/// POST /users
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let created = state.users.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /users/{id}
pub async fn update(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    ValidatedJson(input): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let updated = state.users.update(id, input).await?;
    Ok(Json(updated))
}

/// DELETE /users/{id}
pub async fn delete(State(state): State<AppState>, ResourceId(id): ResourceId) -> AppResult<StatusCode> {
    state.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
