use std::sync::Arc;

use prsk_core::audit::resolve_actor;

use crate::config::ServerConfig;
use crate::services::{ArtistService, TrackService, UserService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: prsk_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    pub artists: Arc<ArtistService>,
    pub tracks: Arc<TrackService>,
    pub users: Arc<UserService>,
}

impl AppState {
    /// Wire up the services over one pool, stamping writes with the configured actor.
    pub fn new(pool: prsk_db::DbPool, config: ServerConfig) -> Self {
        let actor = resolve_actor(&config.audit_actor).to_string();
        Self {
            artists: Arc::new(ArtistService::new(pool.clone(), actor.clone())),
            tracks: Arc::new(TrackService::new(pool.clone(), actor.clone())),
            users: Arc::new(UserService::new(pool.clone(), actor)),
            pool,
            config: Arc::new(config),
        }
    }
}
