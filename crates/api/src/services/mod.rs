//! Resource services.
//!
//! Each service owns the pool and the audit actor, and runs every mutating
//! operation inside a single transaction:
//! 1. Load the target row (updates and deletes).
//! 2. Check uniqueness of any changed key against live rows.
//! 3. Check resource-specific rules (artist reference, password).
//! 4. Write, stamping `updated_at` / `updated_by`.
//! 5. Commit and map the row to its response type.

pub mod artist;
pub mod track;
pub mod user;

pub use artist::ArtistService;
pub use track::TrackService;
pub use user::UserService;
