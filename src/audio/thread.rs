use std::path::PathBuf;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, error, warn};
use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::error::AudioError;

use super::sink::create_sink;
use super::types::{AudioCmd, EngineState, PlayerEvent};

/// Where `Play` starts when nothing is loaded: the current track, else the first.
pub(super) fn start_index(current: Option<usize>, queue_len: usize) -> Option<usize> {
    match current {
        Some(i) if i < queue_len => Some(i),
        _ if queue_len > 0 => Some(0),
        _ => None,
    }
}

/// After a track fails to open, keep going while untried tracks may remain.
pub(super) fn should_skip_failed(consecutive_failures: usize, queue_len: usize) -> bool {
    consecutive_failures < queue_len
}

struct Engine<'s> {
    stream: &'s OutputStream,
    events: Sender<PlayerEvent>,
    queue: Vec<PathBuf>,
    current: Option<usize>,
    sink: Option<Sink>,
    state: EngineState,
    failures: usize,
}

impl<'s> Engine<'s> {
    fn new(stream: &'s OutputStream, events: Sender<PlayerEvent>) -> Self {
        Self {
            stream,
            events,
            queue: Vec::new(),
            current: None,
            sink: None,
            state: EngineState::Stopped,
            failures: 0,
        }
    }

    fn emit(&self, event: PlayerEvent) {
        if self.events.send(event).is_err() {
            debug!("event receiver gone");
        }
    }

    fn set_state(&mut self, state: EngineState) {
        // Idle is re-announced every time so a fresh Play gets an answer.
        if self.state != state || state == EngineState::Idle {
            self.state = state;
            self.emit(PlayerEvent::State(state));
        }
    }

    fn drop_sink(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
    }

    fn start(&mut self, index: usize) {
        self.drop_sink();
        let Some(path) = self.queue.get(index).cloned() else {
            self.set_state(EngineState::Idle);
            return;
        };

        self.current = Some(index);
        self.emit(PlayerEvent::Loading(path.clone()));

        match create_sink(self.stream, &path) {
            Ok(sink) => {
                sink.play();
                self.sink = Some(sink);
                self.failures = 0;
                self.set_state(EngineState::Playing);
            }
            Err(e) => {
                warn!("{e}");
                self.failures += 1;
                self.emit(PlayerEvent::Failed {
                    path: Some(path),
                    message: e.to_string(),
                });
                if should_skip_failed(self.failures, self.queue.len()) {
                    // Stay "playing" so the next Select starts the following track.
                    self.set_state(EngineState::Playing);
                    self.emit(PlayerEvent::Finished);
                } else {
                    self.failures = 0;
                    self.set_state(EngineState::Stopped);
                }
            }
        }
    }

    /// Handle one command; returns false when the thread should exit.
    fn handle(&mut self, cmd: AudioCmd) -> bool {
        match cmd {
            AudioCmd::SetQueue(queue) => {
                self.drop_sink();
                self.current = start_index(None, queue.len());
                self.queue = queue;
                self.failures = 0;
                self.set_state(EngineState::Stopped);
            }
            AudioCmd::Select(i) => {
                if i >= self.queue.len() {
                    warn!("ignoring select of #{i}, queue has {}", self.queue.len());
                    return true;
                }
                if self.state == EngineState::Playing {
                    self.start(i);
                } else {
                    self.drop_sink();
                    self.current = Some(i);
                    if self.state == EngineState::Paused {
                        self.set_state(EngineState::Stopped);
                    }
                }
            }
            AudioCmd::Play => {
                let loaded = self.sink.is_some();
                match self.state {
                    EngineState::Playing if loaded => {}
                    EngineState::Paused if loaded => {
                        if let Some(s) = &self.sink {
                            s.play();
                        }
                        self.set_state(EngineState::Playing);
                    }
                    _ => match start_index(self.current, self.queue.len()) {
                        Some(i) => self.start(i),
                        None => self.set_state(EngineState::Idle),
                    },
                }
            }
            AudioCmd::Pause => {
                if self.state == EngineState::Playing {
                    if let Some(s) = &self.sink {
                        s.pause();
                    }
                    self.set_state(EngineState::Paused);
                }
            }
            AudioCmd::Stop => {
                self.drop_sink();
                self.set_state(EngineState::Stopped);
            }
            AudioCmd::Quit { fade_out_ms } => {
                if let Some(s) = &self.sink {
                    // Fade out gently before stopping.
                    fade_out_sink(s, fade_out_ms);
                }
                self.drop_sink();
                self.set_state(EngineState::Stopped);
                return false;
            }
        }
        true
    }

    /// Periodic check for the end of the current track.
    fn tick(&mut self) {
        let drained = self.sink.as_ref().is_some_and(|s| s.empty());
        if self.state == EngineState::Playing && drained {
            self.drop_sink();
            self.emit(PlayerEvent::Finished);
        }
    }
}

fn fade_out_sink(sink: &Sink, fade_out_ms: u64) {
    if fade_out_ms == 0 {
        sink.set_volume(0.0);
        return;
    }
    let steps: u64 = 20;
    let step_ms = (fade_out_ms / steps).max(1);
    sink.set_volume(1.0);
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        sink.set_volume(1.0 - t);
        thread::sleep(Duration::from_millis(step_ms));
    }
    sink.set_volume(0.0);
}

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    events: Sender<PlayerEvent>,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("pmusic-audio".to_string())
        .spawn(move || {
            let mut stream = match OutputStreamBuilder::open_default_stream() {
                Ok(s) => s,
                Err(e) => {
                    let e = AudioError::from(e);
                    error!("{e}");
                    let _ = events.send(PlayerEvent::Failed {
                        path: None,
                        message: e.to_string(),
                    });
                    return;
                }
            };
            // rodio logs to stderr when OutputStream is dropped; noisy under a TUI.
            stream.log_on_drop(false);

            let mut engine = Engine::new(&stream, events);
            loop {
                match rx.recv_timeout(Duration::from_millis(200)) {
                    Ok(cmd) => {
                        if !engine.handle(cmd) {
                            break;
                        }
                    }
                    Err(RecvTimeoutError::Timeout) => engine.tick(),
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            debug!("audio thread exiting");
        })
}
