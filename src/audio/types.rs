//! Audio-related small types.
//!
//! Commands flow from the event loop to the engine thread, events flow back.

use std::path::PathBuf;

/// What the engine is doing, as reported by the engine itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EngineState {
    Stopped,
    Playing,
    Paused,
    /// Asked to play with nothing queued.
    Idle,
}

#[derive(Debug)]
pub enum AudioCmd {
    /// Replace the queue; stops whatever is playing.
    SetQueue(Vec<PathBuf>),
    /// Make this queue index current, loading it immediately when playing.
    Select(usize),
    /// Resume, or start the current track.
    Play,
    Pause,
    Stop,
    /// Quit the audio thread, optionally fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    /// The engine began loading this track.
    Loading(PathBuf),
    /// The current track played to its end.
    Finished,
    State(EngineState),
    /// A track (or the output device, with `path == None`) could not be used.
    Failed {
        path: Option<PathBuf>,
        message: String,
    },
}
