use std::path::{Path, PathBuf};

/// A playable file. Only its location is known; tags are the engine's business.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Track {
    path: PathBuf,
}

impl Track {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
