//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - the row struct (`FromRow`) with its audit columns flattened in,
//! - request DTOs (`Deserialize` + `Validate`) for create and update,
//! - the response shape serialized to API clients.

pub mod artist;
pub mod track;
pub mod user;
