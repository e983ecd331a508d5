use std::path::{Path, PathBuf};

use crate::art::{ArtDimensions, ArtLookup, probe_dimensions};
use crate::playback::{Controller, PlaybackStatus, Player, TrackChange};
use crate::playlist::PlaybackMode;

/// Which key map is active.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing a folder path to open.
    FolderPrompt,
}

/// The cover currently on screen.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ArtView {
    #[default]
    Placeholder,
    Image {
        path: PathBuf,
        /// `None` when the header could not be read.
        dimensions: Option<ArtDimensions>,
    },
}

pub struct App {
    pub now_playing: Option<String>,
    pub art: ArtView,
    placeholder: Option<PathBuf>,

    pub status: PlaybackStatus,
    pub mode: PlaybackMode,
    pub position: Option<usize>,
    pub track_count: usize,

    pub current_dir: Option<PathBuf>,
    pub scanning: bool,
    pub warning: Option<String>,

    pub controls_visible: bool,
    pub input_mode: InputMode,
    pub prompt: String,
}

impl App {
    pub fn new(placeholder: Option<PathBuf>) -> Self {
        Self {
            now_playing: None,
            art: ArtView::Placeholder,
            placeholder,

            status: PlaybackStatus::Stopped,
            mode: PlaybackMode::Sequential,
            position: None,
            track_count: 0,

            current_dir: None,
            scanning: false,
            warning: None,

            controls_visible: false,
            input_mode: InputMode::Normal,
            prompt: String::new(),
        }
    }

    pub fn toggle_controls(&mut self) {
        self.controls_visible = !self.controls_visible;
    }

    /// Copy status, mode and playlist position from the controller.
    pub fn sync_playback<P: Player>(&mut self, controller: &Controller<P>) {
        self.status = controller.status();
        self.mode = controller.mode();
        self.position = controller.playlist().current_index();
        self.track_count = controller.playlist().len();
    }

    /// Show the outcome of an art lookup. `Unchanged` keeps the current view.
    pub fn apply_art(&mut self, lookup: &ArtLookup) {
        match lookup {
            ArtLookup::Changed(path) => {
                self.art = ArtView::Image {
                    path: path.clone(),
                    dimensions: probe_dimensions(path),
                };
            }
            ArtLookup::Unchanged => {}
            ArtLookup::NotFound => self.art = ArtView::Placeholder,
        }
    }

    pub fn apply_track_change(&mut self, change: &TrackChange) {
        self.now_playing = Some(change.display_path.clone());
        self.apply_art(&change.art);
    }

    /// Path of the image on screen, placeholder included when one is configured.
    pub fn art_path(&self) -> Option<&Path> {
        match &self.art {
            ArtView::Image { path, .. } => Some(path),
            ArtView::Placeholder => self.placeholder.as_deref(),
        }
    }

    /// Panel title: the cover's file name, or "placeholder".
    pub fn art_title(&self) -> String {
        match &self.art {
            ArtView::Image { path, .. } => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            ArtView::Placeholder => "placeholder".to_string(),
        }
    }

    /// Width over height of the cover; square when unknown.
    pub fn art_aspect(&self) -> f32 {
        match &self.art {
            ArtView::Image {
                dimensions: Some(d),
                ..
            } => d.aspect_ratio(),
            _ => 1.0,
        }
    }

    pub fn begin_scan(&mut self, root: &Path) {
        self.scanning = true;
        self.current_dir = Some(root.to_path_buf());
        self.warning = None;
    }

    /// A scan for `root` came back; a folder without tracks clears now-playing.
    pub fn finish_scan(&mut self, root: &Path, warning: Option<String>) {
        self.scanning = false;
        self.current_dir = Some(root.to_path_buf());
        self.warning = warning;
        self.now_playing = None;
    }

    pub fn set_warning(&mut self, warning: impl Into<String>) {
        self.warning = Some(warning.into());
    }

    /// Enter the folder prompt, prefilled with the current folder or `default`.
    pub fn open_prompt(&mut self, default: &Path) {
        let start = self.current_dir.as_deref().unwrap_or(default);
        self.prompt = start.display().to_string();
        self.input_mode = InputMode::FolderPrompt;
    }

    pub fn push_prompt_char(&mut self, c: char) {
        self.prompt.push(c);
    }

    pub fn pop_prompt_char(&mut self) {
        self.prompt.pop();
    }

    pub fn cancel_prompt(&mut self) {
        self.prompt.clear();
        self.input_mode = InputMode::Normal;
    }

    /// Leave the prompt; `None` when the input was blank, which means "do nothing".
    pub fn take_prompt(&mut self) -> Option<PathBuf> {
        let input = std::mem::take(&mut self.prompt);
        self.input_mode = InputMode::Normal;
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        Some(expand_home(input))
    }
}

/// `~` and `~/...` expand to `$HOME`.
fn expand_home(input: &str) -> PathBuf {
    let home = crate::config::home_dir();
    match (input, home) {
        ("~", Some(h)) => h,
        (s, Some(h)) if s.starts_with("~/") => h.join(&s[2..]),
        (s, _) => PathBuf::from(s),
    }
}
