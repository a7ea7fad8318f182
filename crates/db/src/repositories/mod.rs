//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that take
//! any [`sqlx::PgExecutor`] as the first argument, so the same query runs
//! against the pool or inside a caller-owned transaction (`&mut *tx`).
//! Lookups and listings only see rows where `is_deleted = false`.

pub mod artist_repo;
pub mod track_repo;
pub mod user_repo;

pub use artist_repo::ArtistRepo;
pub use track_repo::TrackRepo;
pub use user_repo::UserRepo;
