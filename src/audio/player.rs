use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use log::{debug, error};

use crate::library::Track;
use crate::playback::Player;

use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, PlayerEvent};

/// Handle to the engine thread. Dropping it closes the command channel, which
/// ends the thread.
pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioPlayer {
    /// Start the engine; events arrive on the returned receiver.
    pub fn new() -> (Self, Receiver<PlayerEvent>) {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (event_tx, event_rx) = mpsc::channel::<PlayerEvent>();

        let join = match spawn_audio_thread(rx, event_tx) {
            Ok(h) => Some(h),
            Err(e) => {
                error!("cannot start audio thread: {e}");
                None
            }
        };

        let player = Self {
            tx,
            join: Mutex::new(join),
        };
        (player, event_rx)
    }

    pub fn send(&self, cmd: AudioCmd) -> Result<(), mpsc::SendError<AudioCmd>> {
        self.tx.send(cmd)
    }

    fn send_or_log(&self, cmd: AudioCmd) {
        if let Err(e) = self.send(cmd) {
            debug!("audio thread is gone, dropped {:?}", e.0);
        }
    }

    /// Fade out, stop and wait for the engine thread to finish.
    pub fn quit_softly(&self, fade_out: Duration) {
        self.send_or_log(AudioCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}

impl Player for AudioPlayer {
    fn set_queue(&mut self, tracks: &[Track]) {
        let paths = tracks.iter().map(|t| t.path().to_path_buf()).collect();
        self.send_or_log(AudioCmd::SetQueue(paths));
    }

    fn select(&mut self, index: usize) {
        self.send_or_log(AudioCmd::Select(index));
    }

    fn play(&mut self) {
        self.send_or_log(AudioCmd::Play);
    }

    fn pause(&mut self) {
        self.send_or_log(AudioCmd::Pause);
    }

    fn stop(&mut self) {
        self.send_or_log(AudioCmd::Stop);
    }
}
