use std::path::Path;

use rand::Rng;

use crate::library::Track;

/// How the cursor moves on next/prev.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PlaybackMode {
    /// Step through the list and wrap around at either end.
    #[default]
    Sequential,
    /// Jump to a random other track on every step.
    Shuffle,
}

/// An ordered list of tracks with a cursor.
///
/// The cursor is always a valid index while the playlist is non-empty.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    tracks: Vec<Track>,
    mode: PlaybackMode,
    cursor: usize,
}

impl Playlist {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            mode: PlaybackMode::Sequential,
            cursor: 0,
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: PlaybackMode) {
        self.mode = mode;
    }

    /// Flip between sequential and shuffle, returning the new mode.
    pub fn toggle_mode(&mut self) -> PlaybackMode {
        self.mode = match self.mode {
            PlaybackMode::Sequential => PlaybackMode::Shuffle,
            PlaybackMode::Shuffle => PlaybackMode::Sequential,
        };
        self.mode
    }

    pub fn current_index(&self) -> Option<usize> {
        (!self.tracks.is_empty()).then_some(self.cursor)
    }

    pub fn current(&self) -> Option<&Track> {
        self.tracks.get(self.cursor)
    }

    /// Move the cursor to `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.tracks.len() {
            self.cursor = index;
            true
        } else {
            false
        }
    }

    pub fn position_of(&self, path: &Path) -> Option<usize> {
        self.tracks.iter().position(|t| t.path() == path)
    }

    pub fn next(&mut self) -> Option<usize> {
        self.next_with(&mut rand::thread_rng())
    }

    pub fn prev(&mut self) -> Option<usize> {
        self.prev_with(&mut rand::thread_rng())
    }

    /// Advance the cursor and return the new index; `None` when empty.
    pub fn next_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        let len = self.tracks.len();
        if len == 0 {
            return None;
        }
        self.cursor = match self.mode {
            PlaybackMode::Sequential => (self.cursor + 1) % len,
            PlaybackMode::Shuffle => random_other(len, self.cursor, rng),
        };
        Some(self.cursor)
    }

    /// Step the cursor back and return the new index; `None` when empty.
    ///
    /// Shuffle keeps no history, so going back picks another random track.
    pub fn prev_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        let len = self.tracks.len();
        if len == 0 {
            return None;
        }
        self.cursor = match self.mode {
            PlaybackMode::Sequential => (self.cursor + len - 1) % len,
            PlaybackMode::Shuffle => random_other(len, self.cursor, rng),
        };
        Some(self.cursor)
    }
}

/// Uniform pick over `0..len` excluding `current` (unless it is the only one).
pub(crate) fn random_other<R: Rng + ?Sized>(len: usize, current: usize, rng: &mut R) -> usize {
    if len <= 1 {
        return 0;
    }
    let pick = rng.gen_range(0..len - 1);
    if pick >= current { pick + 1 } else { pick }
}
