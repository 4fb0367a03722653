//! Input line rendering.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::InputState;

/// Renders the input line and positions the hardware cursor, when focused.
pub fn render_input(frame: &mut Frame, area: Rect, input: &InputState, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let widget = Paragraph::new(input.text())
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(widget, area);

    if focused {
        // Cursor column is the display width of the text before the cursor.
        let before: String = input.text().chars().take(input.cursor()).collect();
        let x = area.x + 1 + before.width() as u16;
        let y = area.y + 1;
        frame.set_cursor_position(Position::new(x.min(area.right().saturating_sub(2)), y));
    }
}
