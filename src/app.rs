//! View model for the terminal UI.
//!
//! `App` holds only what the screen shows: the now-playing line, the cover on
//! display, the last warning and the folder prompt. Playback decisions stay in
//! `playback::Controller`; the event loop copies its outcomes in here.

mod model;

pub use model::*;
