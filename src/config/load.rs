use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file and then applies environment
/// variables (prefix `PMUSIC__`) on top, falling back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("PMUSIC")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        let has_extension = self
            .library
            .extensions
            .iter()
            .any(|e| !e.trim().trim_start_matches('.').is_empty());
        if !has_extension {
            return Err("library.extensions must name at least one extension".to_string());
        }
        if self.art.candidates.iter().all(|c| c.trim().is_empty()) {
            return Err("art.candidates must name at least one file".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `PMUSIC_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("PMUSIC_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/pmusic/config.toml`
/// or `~/.config/pmusic/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        home_dir().map(|h| h.join(".config"))
    };

    config_home.map(|d| d.join("pmusic").join("config.toml"))
}

/// Compute the default log file under `$XDG_STATE_HOME/pmusic/pmusic.log`
/// or `~/.local/state/pmusic/pmusic.log`.
pub fn default_log_path() -> Option<PathBuf> {
    let state_home = if let Some(xdg) = env::var_os("XDG_STATE_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        home_dir().map(|h| h.join(".local").join("state"))
    };

    state_home.map(|d| d.join("pmusic").join("pmusic.log"))
}

/// `$HOME`, if set and non-empty.
pub fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}

/// Where the folder prompt starts: `$HOME/Music` when it exists, else the
/// current directory.
pub fn default_music_dir() -> PathBuf {
    home_dir()
        .map(|h| h.join("Music"))
        .filter(|d| d.is_dir())
        .unwrap_or_else(|| PathBuf::from("."))
}
