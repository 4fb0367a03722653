//! Input key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::commands::{self, Command};
use super::state::InputState;

/// Outcome of a submitted input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// A chat message for the agent.
    Chat(String),
    /// A parsed slash command.
    Command(Command),
    /// A line that could not be parsed (usage error to display).
    Invalid(String),
}

/// Handles a key aimed at the input line. Returns a submission when Enter
/// completes a non-empty line.
pub fn handle_key(input: &mut InputState, key: KeyEvent) -> Option<Submission> {
    match key.code {
        KeyCode::Enter => {
            let text = input.take_submission();
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else if trimmed.starts_with('/') {
                match commands::parse(trimmed) {
                    Ok(command) => Some(Submission::Command(command)),
                    Err(usage) => Some(Submission::Invalid(usage)),
                }
            } else {
                Some(Submission::Chat(trimmed.to_string()))
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.insert(c);
            None
        }
        KeyCode::Backspace => {
            input.backspace();
            None
        }
        KeyCode::Delete => {
            input.delete();
            None
        }
        KeyCode::Left => {
            input.move_left();
            None
        }
        KeyCode::Right => {
            input.move_right();
            None
        }
        KeyCode::Home => {
            input.move_home();
            None
        }
        KeyCode::End => {
            input.move_end();
            None
        }
        KeyCode::Up => {
            input.history_prev();
            None
        }
        KeyCode::Down => {
            input.history_next();
            None
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.set_text("");
            None
        }
        _ => None,
    }
}
