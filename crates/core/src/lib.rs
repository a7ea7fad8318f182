//! Domain primitives shared by the database and HTTP layers.
//!
//! Nothing in this crate touches the database or the network: it holds the
//! error taxonomy, audit metadata, the `MusicType` code table, pagination
//! math, and the change-detection helpers used by partial updates.

pub mod audit;
pub mod error;
pub mod music_type;
pub mod pagination;
pub mod patch;
pub mod types;
pub mod validation;
