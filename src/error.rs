//! Error types shared across the player.
//!
//! None of these are fatal: library errors end up as a warning next to an empty
//! playlist, audio errors are reported by the engine thread as events.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a music folder could not be turned into a playlist.
#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("music folder {} does not exist", path.display())]
    Missing { path: PathBuf },

    #[error("{} is not a folder", path.display())]
    NotADirectory { path: PathBuf },

    #[error("cannot read music folder {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("no audio output device: {0}")]
    Device(#[from] rodio::StreamError),

    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
}
