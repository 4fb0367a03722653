//! Transcript rendering: cells to wrapped, styled lines.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::{HistoryCell, TranscriptState};

/// Pre-renders the transcript into wrapped lines for the given width and
/// returns the slice visible at the current scroll position.
///
/// Also updates the state's cached line count and viewport height so scroll
/// handling can clamp correctly on the next key.
pub fn render_transcript(
    state: &mut TranscriptState,
    width: usize,
    height: usize,
) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    for cell in state.cells() {
        push_cell_lines(&mut lines, cell, width);
        lines.push(Line::default());
    }

    state.last_line_count = lines.len();
    state.viewport_height = height;

    let max_offset = lines.len().saturating_sub(height);
    let offset = match state.scroll_offset {
        Some(anchored) => anchored.min(max_offset),
        None => max_offset,
    };

    lines.into_iter().skip(offset).take(height).collect()
}

fn push_cell_lines(out: &mut Vec<Line<'static>>, cell: &HistoryCell, width: usize) {
    let (prefix, style) = match cell {
        HistoryCell::User { .. } => ("> ", Style::default().add_modifier(Modifier::BOLD)),
        HistoryCell::Assistant { .. } => ("", Style::default()),
        HistoryCell::System { .. } => ("• ", Style::default().fg(Color::DarkGray)),
        HistoryCell::Error { .. } => ("✗ ", Style::default().fg(Color::Red)),
    };

    let continuation = " ".repeat(prefix.len());
    for (i, line) in wrap_text(cell.content(), width.saturating_sub(prefix.len())).into_iter().enumerate() {
        let lead = if i == 0 { prefix.to_string() } else { continuation.clone() };
        out.push(Line::from(Span::styled(format!("{lead}{line}"), style)));
    }
}

/// Greedy word wrap. Words longer than the width are hard-split.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for raw_line in text.lines() {
        if raw_line.is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.chars().count() + 1 + word.chars().count() <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
            // Hard-split oversized words.
            while current.chars().count() > width {
                let split: String = current.chars().take(width).collect();
                let rest: String = current.chars().skip(width).collect();
                lines.push(split);
                current = rest;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
