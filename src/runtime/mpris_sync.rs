use std::path::Path;

use crate::mpris::MprisHandle;

/// Publish the track the engine just started loading, with the cover on screen.
pub fn publish_track(mpris: &MprisHandle, title: &str, path: &Path, art: Option<&Path>) {
    mpris.set_now_playing(Some(title.to_string()), Some(path));
    mpris.set_art(art);
}

/// A new folder replaced the playlist; nothing is loaded yet.
pub fn publish_folder(mpris: &MprisHandle, art: Option<&Path>) {
    mpris.set_now_playing(None, None);
    mpris.set_art(art);
}
