//! Rendering of the player screen with `ratatui`.
//!
//! The screen mirrors a small square player window: a header with the track
//! being played, the cover panel, a status box and a controls bar that only
//! shows up when asked for.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::app::{App, ArtView, InputMode};
use crate::art::fit_within;
use crate::playback::DisplayRoots;
use crate::playlist::PlaybackMode;

const CONTROLS: [(&str, &str); 8] = [
    ("h/l", "prev/next"),
    ("space/p", "play/pause"),
    ("s", "shuffle"),
    ("x", "stop"),
    ("o", "open folder"),
    ("?", "hide controls"),
    ("q", "quit"),
    ("esc", "cancel prompt"),
];

fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect::<Vec<String>>()
        .join(" | ")
}

fn mode_label(mode: PlaybackMode) -> &'static str {
    match mode {
        PlaybackMode::Sequential => "Loop",
        PlaybackMode::Shuffle => "Shuffle",
    }
}

/// One line summary: status, mode, position and folder.
fn status_text(app: &App, roots: &DisplayRoots) -> String {
    let mut parts: Vec<String> = vec![
        app.status.label().to_string(),
        mode_label(app.mode).to_string(),
    ];

    match app.position {
        Some(i) => parts.push(format!("{}/{}", i + 1, app.track_count)),
        None => parts.push("no tracks".to_string()),
    }

    if let Some(dir) = &app.current_dir {
        parts.push(format!("Folder: {}", roots.shorten(dir)));
    }
    if app.scanning {
        parts.push("scanning...".to_string());
    }

    parts.join(" • ")
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(3);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Largest cell area with the cover's aspect inside `area`.
///
/// A terminal cell is about twice as tall as it is wide, so the fit is done on
/// half rows.
fn art_rect(area: Rect, aspect: f32) -> Rect {
    let (w, half_rows) = fit_within(area.width, area.height.saturating_mul(2), aspect);
    let h = (half_rows / 2).max(1).min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w) / 2),
        y: area.y + (area.height.saturating_sub(h) / 2),
        width: w.max(1),
        height: h,
    }
}

fn draw_art(frame: &mut Frame, app: &App, area: Rect) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", app.art_title()))
        .title_alignment(Alignment::Center);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let caption = match &app.art {
        ArtView::Image {
            dimensions: Some(d),
            ..
        } => format!("{}x{}\n{:.2}:1", d.width, d.height, d.aspect_ratio()),
        ArtView::Image { .. } => "unreadable image".to_string(),
        ArtView::Placeholder => match app.art_path() {
            Some(p) => format!("♪\n{}", p.display()),
            None => "♪".to_string(),
        },
    };

    let cover = art_rect(inner, app.art_aspect());
    let body = Paragraph::new(caption)
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(body, cover);
}

fn draw_prompt(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect_sized(area.width.saturating_sub(8), 3, area);
    frame.render_widget(Clear, popup);

    let input = Paragraph::new(format!("{}_", app.prompt)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" open folder (enter confirms, esc cancels) ")
            .padding(Padding {
                left: 1,
                right: 0,
                top: 0,
                bottom: 0,
            }),
    );
    frame.render_widget(input, popup);
}

/// Render the whole screen.
pub fn draw(frame: &mut Frame, app: &App, roots: &DisplayRoots) {
    let footer_height = if app.controls_visible { 4 } else { 0 };
    let warning_height = if app.warning.is_some() { 1 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(warning_height),
            Constraint::Length(footer_height),
        ])
        .split(frame.area());

    let now_playing = app
        .now_playing
        .as_deref()
        .unwrap_or("nothing playing");
    let header = Paragraph::new(now_playing)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" pmusic ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    draw_art(frame, app, chunks[1]);

    let status = Paragraph::new(status_text(app, roots))
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[2]);

    if let Some(warning) = &app.warning {
        let line = Paragraph::new(format!(" ! {warning}"))
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
        frame.render_widget(line, chunks[3]);
    }

    if app.controls_visible {
        let footer = Paragraph::new(controls_text())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" controls ")
                    .padding(Padding {
                        left: 1,
                        right: 0,
                        top: 0,
                        bottom: 0,
                    }),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(footer, chunks[4]);
    } else if app.warning.is_none() {
        let hint = Paragraph::new("? controls").dim().alignment(Alignment::Right);
        let last = chunks[2];
        let hint_area = Rect {
            x: last.x,
            y: last.y + last.height.saturating_sub(1),
            width: last.width.saturating_sub(1),
            height: 1,
        };
        frame.render_widget(hint, hint_area);
    }

    if app.input_mode == InputMode::FolderPrompt {
        draw_prompt(frame, app, frame.area());
    }
}
