use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::{AudioPlayer, PlayerEvent};
use crate::config::{self, default_music_dir};
use crate::library::{BuildReport, ScanWorker, build};
use crate::mpris::{ControlCmd, MprisHandle};
use crate::playback::{Controller, PlaybackStatus};
use crate::ui;

use super::keys::{Action, key_action};
use super::mpris_sync::{publish_folder, publish_track};

/// Everything the loop mutates, owned in one place.
pub struct Session<'a> {
    pub settings: &'a config::Settings,
    pub app: App,
    pub controller: Controller<AudioPlayer>,
    pub events: Receiver<PlayerEvent>,
    pub worker: ScanWorker,
    pub mpris: MprisHandle,
    /// Last playback status pushed to MPRIS.
    last_mpris_playback: PlaybackStatus,
}

impl<'a> Session<'a> {
    pub fn new(
        settings: &'a config::Settings,
        controller: Controller<AudioPlayer>,
        events: Receiver<PlayerEvent>,
        mpris: MprisHandle,
    ) -> Self {
        let mut app = App::new(settings.art.placeholder.clone());
        app.sync_playback(&controller);
        mpris.set_playback(app.status);

        Self {
            settings,
            app,
            controller,
            events,
            worker: ScanWorker::new(settings.library.clone()),
            mpris,
            last_mpris_playback: PlaybackStatus::Stopped,
        }
    }

    /// Start scanning `root` in the background; a newer request wins.
    pub fn open_folder(&mut self, root: PathBuf) {
        let root = std::path::absolute(&root).unwrap_or(root);
        info!("opening {}", root.display());
        self.app.begin_scan(&root);
        self.worker.request(root);
    }

    /// Scan `root` on this thread. Used for the folder named on the command line,
    /// before the terminal is taken over.
    pub fn load_folder_now(&mut self, root: PathBuf) {
        let root = std::path::absolute(&root).unwrap_or(root);
        self.app.begin_scan(&root);
        let report = build(&root, &self.settings.library);
        self.on_scan_done(root, report);
    }

    fn on_scan_done(&mut self, root: PathBuf, report: BuildReport) {
        let mut warning = report.warning.map(|e| e.to_string());
        if warning.is_none() && report.playlist.is_empty() {
            warning = Some(format!("no audio files in {}", root.display()));
        }

        self.app.finish_scan(&root, warning);
        let art = self
            .controller
            .load_playlist(report.playlist, &root, self.settings.playback.autoplay);
        self.app.apply_art(&art);
        publish_folder(&self.mpris, self.controller.art().current());
    }

    fn on_player_event(&mut self, ev: PlayerEvent) {
        match ev {
            PlayerEvent::Loading(path) => {
                let change = self.controller.on_track_changing(&path);
                if let Some(dir) = self.controller.art().source_dir() {
                    debug!("art looked up in {}", dir.display());
                }
                self.app.apply_track_change(&change);
                publish_track(
                    &self.mpris,
                    &change.display_path,
                    &path,
                    self.controller.art().current(),
                );
            }
            PlayerEvent::Finished => self.controller.on_track_finished(),
            PlayerEvent::State(state) => self.controller.sync_status(state),
            PlayerEvent::Failed { path, message } => {
                if let Some(p) = path {
                    debug!("playback failed for {}", p.display());
                }
                self.app.set_warning(message);
            }
        }
    }

    /// Handle a remote or keyboard transport command; true means quit.
    fn on_control(&mut self, cmd: ControlCmd) -> bool {
        match cmd {
            ControlCmd::Quit => {
                let fade = Duration::from_millis(self.settings.audio.quit_fade_out_ms);
                self.controller.player().quit_softly(fade);
                return true;
            }
            ControlCmd::Play => {
                if self.controller.status() != PlaybackStatus::Playing {
                    self.controller.play();
                }
            }
            ControlCmd::Pause => {
                if self.controller.status() == PlaybackStatus::Playing {
                    self.controller.toggle_pause();
                }
            }
            ControlCmd::PlayPause => {
                self.controller.toggle_pause();
            }
            ControlCmd::Stop => self.controller.stop(),
            ControlCmd::Next => self.controller.on_next_requested(),
            ControlCmd::Prev => self.controller.on_prev_requested(),
        }
        false
    }

    /// Apply one key action; true means quit.
    fn on_action(&mut self, action: Action) -> bool {
        match action {
            Action::Control(cmd) => return self.on_control(cmd),
            Action::ToggleShuffle => {
                let mode = self.controller.toggle_shuffle();
                info!("playback mode {mode:?}");
            }
            Action::ToggleControls => self.app.toggle_controls(),
            Action::OpenPrompt => self.app.open_prompt(&default_music_dir()),
            Action::PromptChar(c) => self.app.push_prompt_char(c),
            Action::PromptBackspace => self.app.pop_prompt_char(),
            Action::PromptCancel => self.app.cancel_prompt(),
            Action::PromptConfirm => match self.app.take_prompt() {
                Some(root) => self.open_folder(root),
                None => debug!("empty folder prompt, keeping current playlist"),
            },
        }
        false
    }

    /// Drain the scan worker and the engine, then refresh what is shown.
    fn pump(&mut self) {
        if let Some(done) = self.worker.poll() {
            self.on_scan_done(done.root, done.report);
        }

        while let Ok(ev) = self.events.try_recv() {
            self.on_player_event(ev);
        }

        self.app.sync_playback(&self.controller);
        if self.app.status != self.last_mpris_playback {
            self.mpris.set_playback(self.app.status);
            self.last_mpris_playback = self.app.status;
        }
    }
}

/// Main terminal event loop. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    session: &mut Session<'_>,
    control_tx: &Sender<ControlCmd>,
    control_rx: &Receiver<ControlCmd>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        session.pump();

        let roots = session.controller.roots();
        terminal.draw(|f| ui::draw(f, &session.app, roots))?;

        while let Ok(cmd) = control_rx.try_recv() {
            if session.on_control(cmd) {
                return Ok(());
            }
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key_action(&key, session.app.input_mode) {
                    // Transport keys take the same route as the remote.
                    Some(Action::Control(cmd)) => {
                        if control_tx.send(cmd.clone()).is_err() {
                            warn!("control channel closed");
                            if session.on_control(cmd) {
                                return Ok(());
                            }
                        }
                    }
                    Some(action) => {
                        if session.on_action(action) {
                            return Ok(());
                        }
                    }
                    None => {}
                }
            }
        }
    }
}
