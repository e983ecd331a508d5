//! Settings: the TOML schema and how it is loaded.
//!
//! Every key has a default, so a missing or partial `config.toml` is fine.

mod load;
mod schema;

pub use load::{default_log_path, default_music_dir, home_dir};
pub use schema::*;
