//! Data models for the Pokédex backend.
//!
//! `document` is the nested shape accepted on import, `pokemon` the flat relational rows
//! and the public response shapes built from them.

mod document;
mod pokemon;
mod team;
mod user;

pub use document::*;
pub use pokemon::*;
pub use team::*;
pub use user::*;
