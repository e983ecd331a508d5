use std::path::{Path, PathBuf};

use log::debug;

/// Result of looking up a folder's cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtLookup {
    /// A different cover than the one currently shown; load it.
    Changed(PathBuf),
    /// Same cover as last time; nothing to redraw.
    Unchanged,
    /// No cover in this folder; show the placeholder.
    NotFound,
}

fn absolute(path: PathBuf) -> PathBuf {
    std::path::absolute(&path).unwrap_or(path)
}

/// First candidate that exists as a regular file in `dir`.
pub fn find_album_art<S: AsRef<str>>(dir: &Path, candidates: &[S]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|name| name.as_ref().trim())
        .filter(|name| !name.is_empty())
        .map(|name| dir.join(name))
        .find(|p| p.is_file())
        .map(absolute)
}

/// Look up the cover for `dir`, comparing it against the one shown last.
pub fn resolve_art<S: AsRef<str>>(dir: &Path, last: Option<&Path>, candidates: &[S]) -> ArtLookup {
    match find_album_art(dir, candidates) {
        Some(found) if last == Some(found.as_path()) => {
            debug!("same albumart, already loaded");
            ArtLookup::Unchanged
        }
        Some(found) => ArtLookup::Changed(found),
        None => ArtLookup::NotFound,
    }
}

/// Remembers the cover currently on screen and where it came from.
#[derive(Debug, Clone)]
pub struct AlbumArtResolver {
    candidates: Vec<String>,
    current: Option<PathBuf>,
    source_dir: Option<PathBuf>,
}

impl Default for AlbumArtResolver {
    fn default() -> Self {
        Self::new(super::DEFAULT_CANDIDATES.iter().map(|s| s.to_string()).collect())
    }
}

impl AlbumArtResolver {
    pub fn new(candidates: Vec<String>) -> Self {
        Self {
            candidates,
            current: None,
            source_dir: None,
        }
    }

    pub fn current(&self) -> Option<&Path> {
        self.current.as_deref()
    }

    pub fn source_dir(&self) -> Option<&Path> {
        self.source_dir.as_deref()
    }

    /// Resolve the cover for `dir` and update what is considered on screen.
    ///
    /// `NotFound` forgets the previous cover: the placeholder replaces it, so a
    /// later folder with that same cover has to load it again.
    pub fn resolve(&mut self, dir: &Path) -> ArtLookup {
        let lookup = resolve_art(dir, self.current.as_deref(), &self.candidates);
        match &lookup {
            ArtLookup::Changed(path) => {
                debug!("album art {}", path.display());
                self.current = Some(path.clone());
                self.source_dir = Some(dir.to_path_buf());
            }
            ArtLookup::Unchanged => {
                self.source_dir = Some(dir.to_path_buf());
            }
            ArtLookup::NotFound => {
                debug!("no album art in {}", dir.display());
                self.current = None;
                self.source_dir = Some(dir.to_path_buf());
            }
        }
        lookup
    }
}
