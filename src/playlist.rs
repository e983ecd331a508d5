//! The play queue: tracks, a cursor and the advance policy.

mod model;

pub use model::*;
