//! Playback state machine.
//!
//! `Controller` owns the playlist and the album art memo, drives an external
//! [`Player`] with plain commands and turns the player's "loading a new track"
//! notifications into a short now-playing path plus an art lookup.

mod controller;
mod display;
mod player;
mod status;

pub use controller::{Controller, TrackChange};
pub use display::{DisplayRoots, short_display_path};
pub use player::Player;
pub use status::PlaybackStatus;

#[cfg(test)]
mod tests;
