use super::*;
use crate::art::{AlbumArtResolver, ArtLookup};
use crate::audio::EngineState;
use crate::library::Track;
use crate::playlist::{PlaybackMode, Playlist};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Cmd {
    SetQueue(usize),
    Select(usize),
    Play,
    Pause,
    Stop,
}

#[derive(Default)]
struct RecordingPlayer {
    cmds: Vec<Cmd>,
}

impl Player for RecordingPlayer {
    fn set_queue(&mut self, tracks: &[Track]) {
        self.cmds.push(Cmd::SetQueue(tracks.len()));
    }
    fn select(&mut self, index: usize) {
        self.cmds.push(Cmd::Select(index));
    }
    fn play(&mut self) {
        self.cmds.push(Cmd::Play);
    }
    fn pause(&mut self) {
        self.cmds.push(Cmd::Pause);
    }
    fn stop(&mut self) {
        self.cmds.push(Cmd::Stop);
    }
}

fn controller() -> Controller<RecordingPlayer> {
    Controller::new(
        RecordingPlayer::default(),
        AlbumArtResolver::default(),
        DisplayRoots {
            music_dir: Some(PathBuf::from("/home/ann/Music")),
            home: Some(PathBuf::from("/home/ann")),
        },
    )
}

fn tracks(dir: &Path, names: &[&str]) -> Playlist {
    Playlist::new(names.iter().map(|n| Track::new(dir.join(n))).collect())
}

fn take_cmds(c: &mut Controller<RecordingPlayer>) -> Vec<Cmd> {
    std::mem::take(&mut c.player_mut().cmds)
}

#[test]
fn toggle_pause_cycles_between_playing_and_paused() {
    let mut c = controller();
    assert_eq!(c.status(), PlaybackStatus::Stopped);

    assert_eq!(c.toggle_pause(), PlaybackStatus::Playing);
    assert_eq!(c.toggle_pause(), PlaybackStatus::Paused);
    assert_eq!(c.toggle_pause(), PlaybackStatus::Playing);
    assert_eq!(take_cmds(&mut c), vec![Cmd::Play, Cmd::Pause, Cmd::Play]);
}

#[test]
fn stop_and_play_issue_commands_from_any_state() {
    let mut c = controller();
    c.play();
    c.toggle_pause();
    c.stop();
    assert_eq!(c.status(), PlaybackStatus::Stopped);
    c.play();
    assert_eq!(c.status(), PlaybackStatus::Playing);
    c.play();
    assert_eq!(
        take_cmds(&mut c),
        vec![Cmd::Play, Cmd::Pause, Cmd::Stop, Cmd::Play, Cmd::Play]
    );
}

#[test]
fn next_while_stopped_selects_and_starts_playing() {
    let dir = tempdir().unwrap();
    let mut c = controller();
    c.load_playlist(tracks(dir.path(), &["a.mp3", "b.mp3", "c.mp3"]), dir.path(), false);
    take_cmds(&mut c);

    c.on_next_requested();
    assert_eq!(c.status(), PlaybackStatus::Playing);
    assert_eq!(c.playlist().current_index(), Some(1));
    assert_eq!(take_cmds(&mut c), vec![Cmd::Select(1), Cmd::Play]);

    // Already playing: only the selection changes.
    c.on_prev_requested();
    c.on_prev_requested();
    assert_eq!(c.playlist().current_index(), Some(2));
    assert_eq!(take_cmds(&mut c), vec![Cmd::Select(0), Cmd::Select(2)]);
}

#[test]
fn next_while_paused_resumes() {
    let dir = tempdir().unwrap();
    let mut c = controller();
    c.load_playlist(tracks(dir.path(), &["a.mp3", "b.mp3"]), dir.path(), true);
    c.toggle_pause();
    take_cmds(&mut c);

    c.on_next_requested();
    assert_eq!(c.status(), PlaybackStatus::Playing);
    assert_eq!(take_cmds(&mut c), vec![Cmd::Select(1), Cmd::Play]);
}

#[test]
fn skipping_on_empty_playlist_is_a_no_op() {
    let mut c = controller();
    c.on_next_requested();
    c.on_prev_requested();
    c.on_track_finished();
    assert_eq!(c.status(), PlaybackStatus::Stopped);
    assert!(take_cmds(&mut c).is_empty());
}

#[test]
fn load_playlist_stops_queues_resolves_root_art_and_plays() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("cover.png"), b"img").unwrap();

    let mut c = controller();
    c.play();
    take_cmds(&mut c);

    let art = c.load_playlist(tracks(dir.path(), &["a.mp3", "b.flac"]), dir.path(), true);
    assert_eq!(art, ArtLookup::Changed(dir.path().join("cover.png")));
    assert_eq!(c.status(), PlaybackStatus::Playing);
    assert_eq!(take_cmds(&mut c), vec![Cmd::Stop, Cmd::SetQueue(2), Cmd::Play]);
}

#[test]
fn load_empty_playlist_stays_stopped() {
    let dir = tempdir().unwrap();
    let mut c = controller();
    let art = c.load_playlist(Playlist::default(), dir.path(), true);
    assert_eq!(art, ArtLookup::NotFound);
    assert_eq!(c.status(), PlaybackStatus::Stopped);
    assert_eq!(take_cmds(&mut c), vec![Cmd::Stop, Cmd::SetQueue(0)]);
}

#[test]
fn shuffle_mode_survives_playlist_rebuild() {
    let dir = tempdir().unwrap();
    let mut c = controller();
    assert_eq!(c.toggle_shuffle(), PlaybackMode::Shuffle);
    c.load_playlist(tracks(dir.path(), &["a.mp3"]), dir.path(), false);
    assert_eq!(c.playlist().mode(), PlaybackMode::Shuffle);
    assert_eq!(c.toggle_shuffle(), PlaybackMode::Sequential);
    assert_eq!(c.playlist().mode(), PlaybackMode::Sequential);
}

#[test]
fn track_in_same_folder_keeps_art_unchanged() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("cover.jpg"), b"img").unwrap();
    let a = dir.path().join("a.mp3");
    let b = dir.path().join("b.mp3");

    let mut c = controller();
    c.load_playlist(tracks(dir.path(), &["a.mp3", "b.mp3"]), dir.path(), true);

    let first = c.on_track_changing(&a);
    assert_eq!(first.art, ArtLookup::Unchanged);

    c.on_next_requested();
    let second = c.on_track_changing(&b);
    assert_eq!(second.art, ArtLookup::Unchanged);
}

#[test]
fn track_change_into_other_album_reloads_art() {
    let root = tempdir().unwrap();
    let one = root.path().join("one");
    let two = root.path().join("two");
    fs::create_dir_all(&one).unwrap();
    fs::create_dir_all(&two).unwrap();
    fs::write(one.join("cover.jpg"), b"img").unwrap();
    fs::write(two.join("Folder.jpg"), b"img").unwrap();

    let mut c = controller();
    let change = c.on_track_changing(&one.join("x.ogg"));
    assert_eq!(change.art, ArtLookup::Changed(one.join("cover.jpg")));
    let change = c.on_track_changing(&two.join("y.ogg"));
    assert_eq!(change.art, ArtLookup::Changed(two.join("Folder.jpg")));
    let change = c.on_track_changing(&root.path().join("loose.ogg"));
    assert_eq!(change.art, ArtLookup::NotFound);
}

#[test]
fn track_change_reports_short_path_and_syncs_cursor() {
    let music = Path::new("/home/ann/Music/Artist/Album");
    let mut c = controller();
    c.load_playlist(tracks(music, &["01.flac", "02.flac"]), music, false);

    let change = c.on_track_changing(&music.join("02.flac"));
    assert_eq!(change.display_path, "Artist/Album/02.flac");
    assert_eq!(c.playlist().current_index(), Some(1));
}

#[test]
fn track_finished_advances_without_changing_status() {
    let dir = tempdir().unwrap();
    let mut c = controller();
    c.load_playlist(tracks(dir.path(), &["a.mp3", "b.mp3"]), dir.path(), true);
    take_cmds(&mut c);

    c.on_track_finished();
    c.on_track_finished();
    assert_eq!(c.playlist().current_index(), Some(0));
    assert_eq!(c.status(), PlaybackStatus::Playing);
    assert_eq!(take_cmds(&mut c), vec![Cmd::Select(1), Cmd::Select(0)]);
}

#[test]
fn engine_states_translate_at_the_boundary() {
    assert_eq!(PlaybackStatus::from(EngineState::Playing), PlaybackStatus::Playing);
    assert_eq!(PlaybackStatus::from(EngineState::Paused), PlaybackStatus::Paused);
    assert_eq!(PlaybackStatus::from(EngineState::Stopped), PlaybackStatus::Stopped);
    assert_eq!(PlaybackStatus::from(EngineState::Idle), PlaybackStatus::Stopped);

    let mut c = controller();
    c.play();
    c.sync_status(EngineState::Idle);
    assert_eq!(c.status(), PlaybackStatus::Stopped);
    // Idle counts as stopped: toggling starts playback again.
    assert_eq!(c.toggle_pause(), PlaybackStatus::Playing);
}

#[test]
fn short_display_path_strips_known_prefixes() {
    let music = Some(Path::new("/home/ann/Music"));
    let home = Some(Path::new("/home/ann"));

    assert_eq!(
        short_display_path(Path::new("/home/ann/Music/A/b.mp3"), music, home),
        "A/b.mp3"
    );
    assert_eq!(
        short_display_path(Path::new("/home/ann/Downloads/b.mp3"), music, home),
        "~/Downloads/b.mp3"
    );
    assert_eq!(
        short_display_path(Path::new("/srv/b.mp3"), music, home),
        "/srv/b.mp3"
    );
    assert_eq!(short_display_path(Path::new("/home/ann"), music, home), "~");
    assert_eq!(
        short_display_path(Path::new("/srv/b.mp3"), None, None),
        "/srv/b.mp3"
    );
}
