use std::sync::mpsc;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::logging::setup_logger;
use crate::mpris::{ControlCmd, MprisHandle, spawn_mpris};

mod event_loop;
mod keys;
mod mpris_sync;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();
    setup_logger(&settings.logging);
    info!("pmusic {} starting", env!("CARGO_PKG_VERSION"));

    let (controller, events) = startup::build_controller(&settings);

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    let mpris = if settings.mpris.enabled {
        spawn_mpris(control_tx.clone())
    } else {
        MprisHandle::detached()
    };

    let mut session = event_loop::Session::new(&settings, controller, events, mpris);
    if let Some(dir) = startup::start_dir() {
        session.load_folder_now(dir);
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &mut session, &control_tx, &control_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("bye");
    run_result
}
