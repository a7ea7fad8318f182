use axum::routing::get;
use axum::Router;

use crate::handlers::system;
use crate::state::AppState;

/// Health routes, mounted at the root.
///
/// ```text
/// GET /health           -> greeting (text)
/// GET /system/health    -> health_check (JSON)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(system::greeting))
        .route("/system/health", get(system::health_check))
}
