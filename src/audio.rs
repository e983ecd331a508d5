//! Audio engine: a `rodio` sink on its own thread.
//!
//! The engine is the [`Player`](crate::playback::Player) the state machine drives.
//! It reports back through a `PlayerEvent` channel, most importantly a `Loading`
//! event for every track it starts.

mod player;
mod sink;
mod thread;
mod types;

pub use player::AudioPlayer;
pub use types::*;
