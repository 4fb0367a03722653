//! Panel history overlay: restore a previously shown component.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState};

use super::OverlayOutcome;
use crate::features::transcript::HistoryCell;
use crate::state::TuiState;

/// History picker state: a selection over the store's history, newest first.
#[derive(Debug, Default)]
pub struct HistoryOverlay {
    pub selected: usize,
}

impl HistoryOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, tui: &mut TuiState, key: KeyEvent) -> OverlayOutcome {
        let len = tui.panel.store.history().len();
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => OverlayOutcome::Close,
            KeyCode::Char('j') | KeyCode::Down => {
                if len > 0 {
                    self.selected = (self.selected + 1).min(len - 1);
                }
                OverlayOutcome::Stay
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                OverlayOutcome::Stay
            }
            KeyCode::Enter => {
                // Displayed newest-first; map back to arena order.
                if let Some(instance) = tui.panel.store.history().iter().rev().nth(self.selected) {
                    let id = instance.id;
                    let name = instance.name.clone();
                    if tui.panel.restore(id) {
                        tui.transcript
                            .push_cell(HistoryCell::system(format!("Restored {name} {id}")));
                    }
                }
                OverlayOutcome::Close
            }
            _ => OverlayOutcome::Stay,
        }
    }

    /// Renders the overlay centered over the given area.
    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        let [popup] = Layout::horizontal([Constraint::Percentage(60)])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::vertical([Constraint::Percentage(60)])
            .flex(Flex::Center)
            .areas(popup);

        frame.render_widget(Clear, popup);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Panel history (Enter restore, Esc close) ");
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let history = tui.panel.store.history();
        if history.is_empty() {
            frame.render_widget(
                ratatui::widgets::Paragraph::new("Nothing has been shown yet."),
                inner,
            );
            return;
        }

        let current_id = tui.panel.store.current().map(|instance| instance.id);
        let items: Vec<ListItem<'static>> = history
            .iter()
            .rev()
            .map(|instance| {
                let marker = if Some(instance.id) == current_id { "● " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::raw(marker),
                    Span::styled(
                        format!("{:<20}", instance.name),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("{}  {}", instance.id, instance.timestamp.format("%H:%M:%S")),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).highlight_style(
            Style::default().bg(Color::Cyan).fg(Color::Black).add_modifier(Modifier::BOLD),
        );
        let mut state = ListState::default();
        state.select(Some(self.selected));
        frame.render_stateful_widget(list, inner, &mut state);
    }
}
