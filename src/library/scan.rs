use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::error::LibraryError;
use crate::playlist::Playlist;

use super::model::Track;

/// Outcome of opening a folder: the new playlist, plus the reason it is empty
/// when the folder itself could not be read.
#[derive(Debug)]
pub struct BuildReport {
    pub playlist: Playlist,
    pub warning: Option<LibraryError>,
}

fn normalized_extensions(settings: &LibrarySettings) -> Vec<String> {
    settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

fn is_audio_file(path: &Path, exts: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn check_root(root: &Path) -> Result<(), LibraryError> {
    let meta = fs::metadata(root).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LibraryError::Missing {
            path: root.to_path_buf(),
        },
        _ => LibraryError::Unreadable {
            path: root.to_path_buf(),
            source,
        },
    })?;

    if !meta.is_dir() {
        return Err(LibraryError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    fs::read_dir(root)
        .map(drop)
        .map_err(|source| LibraryError::Unreadable {
            path: root.to_path_buf(),
            source,
        })
}

/// Walk `root` and collect every audio file, in the order the walk finds them.
///
/// `cancelled` is polled before each entry; once it returns true the walk stops
/// and whatever was found so far is returned.
pub fn scan(
    root: &Path,
    settings: &LibrarySettings,
    cancelled: &dyn Fn() -> bool,
) -> Result<Vec<Track>, LibraryError> {
    check_root(root)?;

    let exts = normalized_extensions(settings);
    let mut tracks: Vec<Track> = Vec::new();

    let mut walker = WalkDir::new(root).follow_links(settings.follow_links);
    if let Some(d) = settings.max_depth {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
    {
        if cancelled() {
            debug!("scan of {} cancelled", root.display());
            break;
        }

        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("skipping unreadable entry: {e}");
                continue;
            }
        };

        let path = entry.path();
        if entry.file_type().is_file() && is_audio_file(path, &exts) {
            debug!("+ {}", path.display());
            tracks.push(Track::new(path));
        }
    }

    Ok(tracks)
}

/// Build a fresh playlist from `root`. Never fails: an unusable folder yields an
/// empty playlist and a warning.
pub fn build(root: &Path, settings: &LibrarySettings) -> BuildReport {
    build_until(root, settings, &|| false)
}

pub(super) fn build_until(
    root: &Path,
    settings: &LibrarySettings,
    cancelled: &dyn Fn() -> bool,
) -> BuildReport {
    match scan(root, settings, cancelled) {
        Ok(tracks) => {
            info!("loaded {} tracks from {}", tracks.len(), root.display());
            BuildReport {
                playlist: Playlist::new(tracks),
                warning: None,
            }
        }
        Err(e) => {
            warn!("{e}");
            BuildReport {
                playlist: Playlist::default(),
                warning: Some(e),
            }
        }
    }
}
