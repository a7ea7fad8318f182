//! PostgreSQL persistence for artists, tracks, and users.
//!
//! Exposes pool construction, a liveness check, embedded migrations, the row
//! models and request DTOs (`models`), and zero-sized repositories
//! (`repositories`) whose queries only ever see non-deleted rows unless a
//! method says otherwise.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// The wire field a partial unique index guards, keyed by index name.
///
/// Used to turn a storage-level unique violation into a field-level
/// conflict when a concurrent writer slips past the service pre-check.
pub fn unique_constraint_field(constraint: &str) -> Option<&'static str> {
    match constraint {
        "uq_artists_artist_name" => Some("artistName"),
        "uq_tracks_title_music_type" => Some("Title and MusicType"),
        "uq_users_user_name" => Some("userName"),
        _ => None,
    }
}
