//! MPRIS remote control on the session bus.
//!
//! Media keys and `playerctl` reach the event loop as `ControlCmd`s; the loop
//! publishes status, now-playing path and cover back through `MprisHandle`.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex, mpsc::Sender};

use async_io::{Timer, block_on};
use log::{info, warn};
use zbus::{Connection, interface};
use zvariant::{OwnedValue, Value};

use crate::playback::PlaybackStatus;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlCmd {
    Quit,
    Play,
    Pause,
    PlayPause,
    Stop,
    Next,
    Prev,
}

#[derive(Debug, Default)]
struct SharedState {
    playback: PlaybackStatus,
    title: Option<String>,
    url: Option<String>,
    art_url: Option<String>,
}

pub struct MprisHandle {
    state: Arc<Mutex<SharedState>>,
}

fn file_url(path: &Path) -> String {
    format!("file://{}", path.display())
}

impl MprisHandle {
    /// A handle that is not published on the bus.
    pub fn detached() -> Self {
        Self {
            state: Arc::new(Mutex::new(SharedState::default())),
        }
    }

    pub fn set_playback(&self, playback: PlaybackStatus) {
        if let Ok(mut s) = self.state.lock() {
            s.playback = playback;
        }
    }

    pub fn set_now_playing(&self, title: Option<String>, path: Option<&Path>) {
        if let Ok(mut s) = self.state.lock() {
            s.title = title;
            s.url = path.map(file_url);
        }
    }

    pub fn set_art(&self, art: Option<&Path>) {
        if let Ok(mut s) = self.state.lock() {
            s.art_url = art.map(file_url);
        }
    }
}

struct RootIface {
    tx: Sender<ControlCmd>,
}

#[interface(name = "org.mpris.MediaPlayer2")]
impl RootIface {
    fn raise(&self) {
        // No window to raise.
    }

    fn quit(&self) {
        let _ = self.tx.send(ControlCmd::Quit);
    }

    #[zbus(property)]
    fn can_quit(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_raise(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn has_track_list(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn identity(&self) -> &str {
        "pmusic"
    }

    #[zbus(property)]
    fn supported_uri_schemes(&self) -> Vec<String> {
        vec!["file".to_string()]
    }

    #[zbus(property)]
    fn supported_mime_types(&self) -> Vec<String> {
        ["audio/mpeg", "audio/ogg", "audio/x-wav", "audio/flac"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

struct PlayerIface {
    tx: Sender<ControlCmd>,
    state: Arc<Mutex<SharedState>>,
}

fn owned_string(s: String) -> Option<OwnedValue> {
    OwnedValue::try_from(Value::from(s)).ok()
}

#[interface(name = "org.mpris.MediaPlayer2.Player")]
impl PlayerIface {
    fn next(&self) {
        let _ = self.tx.send(ControlCmd::Next);
    }

    fn previous(&self) {
        let _ = self.tx.send(ControlCmd::Prev);
    }

    fn play(&self) {
        let _ = self.tx.send(ControlCmd::Play);
    }

    fn pause(&self) {
        let _ = self.tx.send(ControlCmd::Pause);
    }

    fn play_pause(&self) {
        let _ = self.tx.send(ControlCmd::PlayPause);
    }

    fn stop(&self) {
        let _ = self.tx.send(ControlCmd::Stop);
    }

    #[zbus(property)]
    fn playback_status(&self) -> &str {
        let Ok(s) = self.state.lock() else {
            return "Stopped";
        };
        s.playback.label()
    }

    #[zbus(property)]
    fn can_control(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_play(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_pause(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_go_next(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_go_previous(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn metadata(&self) -> HashMap<String, OwnedValue> {
        let mut map = HashMap::new();
        let Ok(s) = self.state.lock() else {
            return map;
        };

        let title = s.title.clone().unwrap_or_default();
        if let Some(v) = owned_string(title) {
            map.insert("xesam:title".to_string(), v);
        }
        if let Some(v) = s.url.clone().and_then(owned_string) {
            map.insert("xesam:url".to_string(), v);
        }
        if let Some(v) = s.art_url.clone().and_then(owned_string) {
            map.insert("mpris:artUrl".to_string(), v);
        }
        map
    }
}

pub fn spawn_mpris(tx: Sender<ControlCmd>) -> MprisHandle {
    let handle = MprisHandle::detached();

    let state_for_thread = handle.state.clone();
    let spawned = std::thread::Builder::new()
        .name("pmusic-mpris".to_string())
        .spawn(move || {
            block_on(async move {
                let path = "/org/mpris/MediaPlayer2";

                let connection = match Connection::session().await {
                    Ok(c) => c,
                    Err(e) => {
                        warn!("MPRIS: failed to connect to session bus: {e}");
                        return;
                    }
                };

                if let Err(e) = connection
                    .request_name("org.mpris.MediaPlayer2.pmusic")
                    .await
                {
                    warn!("MPRIS: failed to acquire name: {e}");
                    return;
                }

                let object_server = connection.object_server();

                if let Err(e) = object_server.at(path, RootIface { tx: tx.clone() }).await {
                    warn!("MPRIS: failed to register root iface: {e}");
                    return;
                }

                if let Err(e) = object_server
                    .at(
                        path,
                        PlayerIface {
                            tx,
                            state: state_for_thread,
                        },
                    )
                    .await
                {
                    warn!("MPRIS: failed to register player iface: {e}");
                    return;
                }

                info!("MPRIS: registered org.mpris.MediaPlayer2.pmusic");

                // Keep the service alive.
                loop {
                    Timer::after(std::time::Duration::from_secs(3600)).await;
                }
            });
        });

    if let Err(e) = spawned {
        warn!("MPRIS: cannot start thread: {e}");
    }

    handle
}
