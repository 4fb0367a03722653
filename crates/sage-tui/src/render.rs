//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` (mutating only render caches such as the
//! transcript line count), draw to a ratatui frame, and never return
//! effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::features::{input, panel, transcript};
use crate::overlays::Overlay;
use crate::state::{AppState, Focus};

/// Height of the input box (bordered single line).
const INPUT_HEIGHT: u16 = 3;

/// Height of the status line below the input.
const STATUS_HEIGHT: u16 = 1;

/// Share of the width given to the panel.
const PANEL_PERCENT: u16 = 45;

/// Spinner frames for the status line animation.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the entire TUI to the frame.
pub fn render(app: &mut AppState, frame: &mut Frame) {
    let area = frame.area();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(100 - PANEL_PERCENT),
            Constraint::Percentage(PANEL_PERCENT),
        ])
        .split(area);

    // Left column: transcript, input, status.
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(columns[0]);

    render_chat(app, frame, rows[0]);
    input::render_input(
        frame,
        rows[1],
        &app.tui.input,
        app.tui.focus == Focus::Input && app.overlay.is_none(),
    );
    render_status(app, frame, rows[2]);

    panel::render_panel(
        frame,
        columns[1],
        &app.tui.panel,
        app.tui.focus == Focus::Panel && app.overlay.is_none(),
    );

    if let Some(Overlay::History(overlay)) = &app.overlay {
        overlay.render(frame, area, &app.tui);
    }
}

fn render_chat(app: &mut AppState, frame: &mut Frame, area: ratatui::layout::Rect) {
    let width = area.width.saturating_sub(1) as usize;
    let height = area.height as usize;

    let lines = transcript::render_transcript(&mut app.tui.transcript, width, height);
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status(app: &AppState, frame: &mut Frame, area: ratatui::layout::Rect) {
    let tui = &app.tui;
    let mut spans = Vec::new();

    if tui.thread.pending {
        let spinner = SPINNER_FRAMES[tui.spinner_frame % SPINNER_FRAMES.len()];
        spans.push(Span::styled(
            format!("{spinner} thinking  "),
            Style::default().fg(Color::Cyan),
        ));
    }

    spans.push(Span::styled(
        format!("session {}  ", short_session(&tui.session_id)),
        Style::default().fg(Color::DarkGray),
    ));
    if let Some(auth) = &tui.auth {
        spans.push(Span::styled(
            format!("{}  ", auth.user.username),
            Style::default().fg(Color::Green),
        ));
    }
    spans.push(Span::styled(
        match tui.focus {
            Focus::Input => "Tab: panel  /help for commands",
            Focus::Panel => "Tab: input  j/k move  a cart  t try on  x remove  c clear  h history",
        },
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Session ids are uuids; the first block is plenty for the status line.
fn short_session(session_id: &str) -> &str {
    session_id.split('-').next().unwrap_or(session_id)
}
