//! Logger setup.
//!
//! The TUI owns the terminal, so records go to a log file by default. When the
//! file cannot be opened we fall back to stderr.

use std::fs::{self, File, OpenOptions};
use std::path::Path;

use crate::config::{LoggingSettings, default_log_path};

pub fn setup_logger(settings: &LoggingSettings) {
    let mut log_builder = env_logger::Builder::new();

    log_builder
        .format_timestamp_millis()
        .parse_filters(&settings.level)
        // symphonia probes are chatty at info
        .filter_module("symphonia", log::LevelFilter::Warn)
        .filter_module("zbus", log::LevelFilter::Warn);

    // RUST_LOG wins over the config file.
    if let Ok(filters) = std::env::var("RUST_LOG") {
        log_builder.parse_filters(&filters);
    }

    let path = settings.file.clone().or_else(default_log_path);
    let file = path.as_deref().and_then(|p| match open_log_file(p) {
        Ok(f) => Some(f),
        Err(e) => {
            eprintln!("pmusic: cannot open log file {}: {e}", p.display());
            None
        }
    });

    if let Some(file) = file {
        log_builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    if let Err(e) = log_builder.try_init() {
        eprintln!("pmusic: logger already initialised: {e}");
    }
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
