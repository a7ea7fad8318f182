//! Route definitions for the `/artists` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::artist;
use crate::state::AppState;

/// Routes mounted at `/artists`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(artist::list).post(artist::create))
        .route("/{id}", put(artist::update).delete(artist::delete))
}
