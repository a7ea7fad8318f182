//! Credential handling. There is no session or token layer; the only check is
//! whether a supplied password matches the stored hash.

pub mod password;
