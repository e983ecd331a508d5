use std::env;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use log::info;

use crate::art::AlbumArtResolver;
use crate::audio::{AudioPlayer, PlayerEvent};
use crate::config;
use crate::playback::{Controller, DisplayRoots};
use crate::playlist::PlaybackMode;

/// Folder given as the first command line argument, if any.
pub fn start_dir() -> Option<PathBuf> {
    env::args_os().nth(1).map(PathBuf::from)
}

/// Start the audio engine and wrap it in a controller set up from `settings`.
pub fn build_controller(
    settings: &config::Settings,
) -> (Controller<AudioPlayer>, Receiver<PlayerEvent>) {
    let (player, events) = AudioPlayer::new();
    let art = AlbumArtResolver::new(settings.art.candidates.clone());
    let roots = DisplayRoots::from_settings(&settings.display);

    let mut controller = Controller::new(player, art, roots);
    if settings.playback.shuffle {
        info!("shuffle enabled by config");
        controller.set_mode(PlaybackMode::Shuffle);
    }
    (controller, events)
}
