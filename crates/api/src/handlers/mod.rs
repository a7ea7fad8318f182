pub mod artist;
pub mod system;
pub mod track;
pub mod user;
