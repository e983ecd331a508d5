use std::path::Path;

use log::{debug, info};

use crate::art::{AlbumArtResolver, ArtLookup};
use crate::audio::EngineState;
use crate::playlist::{PlaybackMode, Playlist};

use super::display::DisplayRoots;
use super::player::Player;
use super::status::PlaybackStatus;

/// What the UI needs to know once the player starts loading a track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackChange {
    pub display_path: String,
    pub art: ArtLookup,
}

#[derive(Copy, Clone)]
enum Step {
    Prev,
    Next,
}

/// Owns the playlist, the art memo and the playback status; drives `P`.
///
/// All methods are meant to run on the event loop thread.
pub struct Controller<P: Player> {
    player: P,
    playlist: Playlist,
    art: AlbumArtResolver,
    status: PlaybackStatus,
    roots: DisplayRoots,
}

impl<P: Player> Controller<P> {
    pub fn new(player: P, art: AlbumArtResolver, roots: DisplayRoots) -> Self {
        Self {
            player,
            playlist: Playlist::default(),
            art,
            status: PlaybackStatus::Stopped,
            roots,
        }
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn mode(&self) -> PlaybackMode {
        self.playlist.mode()
    }

    pub fn set_mode(&mut self, mode: PlaybackMode) {
        self.playlist.set_mode(mode);
    }

    pub fn art(&self) -> &AlbumArtResolver {
        &self.art
    }

    pub fn roots(&self) -> &DisplayRoots {
        &self.roots
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    pub fn stop(&mut self) {
        debug!("stop");
        self.player.stop();
        self.status = PlaybackStatus::Stopped;
    }

    pub fn play(&mut self) {
        debug!("play()");
        self.player.play();
        self.status = PlaybackStatus::Playing;
    }

    /// Pause while playing, otherwise (re)start playback.
    pub fn toggle_pause(&mut self) -> PlaybackStatus {
        match self.status {
            PlaybackStatus::Playing => {
                debug!("pause");
                self.player.pause();
                self.status = PlaybackStatus::Paused;
            }
            PlaybackStatus::Stopped | PlaybackStatus::Paused => self.play(),
        }
        self.status
    }

    pub fn on_prev_requested(&mut self) {
        debug!("prev requested");
        self.step(Step::Prev);
    }

    pub fn on_next_requested(&mut self) {
        debug!("next requested");
        self.step(Step::Next);
    }

    fn step(&mut self, step: Step) {
        let moved = match step {
            Step::Prev => self.playlist.prev(),
            Step::Next => self.playlist.next(),
        };
        let Some(index) = moved else {
            debug!("playlist is empty, nothing to skip to");
            return;
        };

        self.player.select(index);
        if self.status != PlaybackStatus::Playing {
            self.play();
        }
    }

    /// The engine drained the current track: move on like `next` would, without
    /// touching the status.
    pub fn on_track_finished(&mut self) {
        if let Some(index) = self.playlist.next() {
            if let Some(track) = self.playlist.current() {
                debug!("track finished, advancing to {}", track.path().display());
            }
            self.player.select(index);
        }
    }

    /// The engine started loading `path`.
    ///
    /// Only this transition re-resolves art; other engine status changes never
    /// reach here.
    pub fn on_track_changing(&mut self, path: &Path) -> TrackChange {
        if let Some(index) = self.playlist.position_of(path) {
            self.playlist.select(index);
        }

        let art = match path.parent() {
            Some(dir) => self.art.resolve(dir),
            None => ArtLookup::NotFound,
        };
        let display_path = self.roots.shorten(path);
        info!("now playing {display_path}");

        TrackChange { display_path, art }
    }

    /// Swap in a freshly built playlist for `root`.
    ///
    /// Stops playback, hands the queue to the player, resolves the folder's own
    /// cover and starts playing when asked to and there is something to play.
    pub fn load_playlist(&mut self, mut playlist: Playlist, root: &Path, autoplay: bool) -> ArtLookup {
        info!("load playlist {} ({} tracks)", root.display(), playlist.len());
        self.stop();

        // The mode outlives the playlist it was chosen on.
        playlist.set_mode(self.playlist.mode());
        self.player.set_queue(playlist.tracks());
        self.playlist = playlist;

        let art = self.art.resolve(root);
        if autoplay && !self.playlist.is_empty() {
            self.play();
        }
        art
    }

    pub fn toggle_shuffle(&mut self) -> PlaybackMode {
        let mode = self.playlist.toggle_mode();
        debug!("playback mode {mode:?}");
        mode
    }

    /// Adopt the state the engine reports.
    pub fn sync_status(&mut self, state: EngineState) {
        let status = PlaybackStatus::from(state);
        if status != self.status {
            debug!("engine reports {state:?}, status {:?} -> {status:?}", self.status);
            self.status = status;
        }
    }
}
