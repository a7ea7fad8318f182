//! Route definitions for the `/prsk-music` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::track;
use crate::state::AppState;

/// Routes mounted at `/prsk-music`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(track::list).post(track::create))
        .route("/{id}", put(track::update).delete(track::delete))
}
