use std::path::{Path, PathBuf};

use crate::config::{DisplaySettings, home_dir};

/// Prefixes stripped from now-playing paths.
#[derive(Debug, Clone, Default)]
pub struct DisplayRoots {
    pub music_dir: Option<PathBuf>,
    pub home: Option<PathBuf>,
}

impl DisplayRoots {
    /// Roots from settings, with `$HOME/Music` as the default music folder.
    pub fn from_settings(settings: &DisplaySettings) -> Self {
        let home = home_dir();
        let music_dir = settings
            .music_dir
            .clone()
            .or_else(|| home.as_ref().map(|h| h.join("Music")));
        Self { music_dir, home }
    }

    pub fn shorten(&self, path: &Path) -> String {
        short_display_path(path, self.music_dir.as_deref(), self.home.as_deref())
    }
}

/// Human-friendly form of `path`.
///
/// Inside the music folder the path is shown relative to it, inside the home
/// folder it starts with `~`, anything else is shown as is.
pub fn short_display_path(path: &Path, music_dir: Option<&Path>, home: Option<&Path>) -> String {
    if let Some(rest) = music_dir.and_then(|m| path.strip_prefix(m).ok()) {
        if !rest.as_os_str().is_empty() {
            return rest.display().to_string();
        }
    }

    if let Some(rest) = home.and_then(|h| path.strip_prefix(h).ok()) {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return Path::new("~").join(rest).display().to_string();
    }

    path.display().to_string()
}
