//! Input line state.
//!
//! A single-line buffer with a char-indexed cursor and prompt history
//! navigation (Up/Down recall previous submissions).

#[derive(Debug, Default)]
pub struct InputState {
    text: String,
    /// Cursor position in chars.
    cursor: usize,
    /// Previously submitted prompts, oldest first.
    pub history: Vec<String>,
    /// Current position while navigating history.
    history_index: Option<usize>,
    /// Draft saved when history navigation starts.
    draft: String,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.chars().count();
        self.history_index = None;
    }

    pub fn insert(&mut self, c: char) {
        let byte_index = self.byte_index(self.cursor);
        self.text.insert(byte_index, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let byte_index = self.byte_index(self.cursor - 1);
            self.text.remove(byte_index);
            self.cursor -= 1;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.text.chars().count() {
            let byte_index = self.byte_index(self.cursor);
            self.text.remove(byte_index);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    /// Clears the line and returns its contents, recording it in history.
    pub fn take_submission(&mut self) -> String {
        let text = std::mem::take(&mut self.text);
        self.cursor = 0;
        self.history_index = None;
        if !text.trim().is_empty() && self.history.last() != Some(&text) {
            self.history.push(text.clone());
        }
        text
    }

    /// Recalls the previous history entry.
    pub fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let next_index = match self.history_index {
            None => {
                self.draft = self.text.clone();
                self.history.len() - 1
            }
            Some(0) => 0,
            Some(i) => i - 1,
        };
        self.history_index = Some(next_index);
        self.text = self.history[next_index].clone();
        self.cursor = self.text.chars().count();
    }

    /// Recalls the next history entry, restoring the draft at the end.
    pub fn history_next(&mut self) {
        let Some(index) = self.history_index else {
            return;
        };
        if index + 1 < self.history.len() {
            self.history_index = Some(index + 1);
            self.text = self.history[index + 1].clone();
        } else {
            self.history_index = None;
            self.text = std::mem::take(&mut self.draft);
        }
        self.cursor = self.text.chars().count();
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_edit_multibyte() {
        let mut input = InputState::new();
        for c in "héllo".chars() {
            input.insert(c);
        }
        assert_eq!(input.text(), "héllo");
        input.move_left();
        input.backspace(); // removes the second 'l'
        assert_eq!(input.text(), "hélo");
    }

    #[test]
    fn test_take_submission_records_history() {
        let mut input = InputState::new();
        input.set_text("show shoes");
        assert_eq!(input.take_submission(), "show shoes");
        assert_eq!(input.text(), "");
        assert_eq!(input.history, vec!["show shoes"]);

        // Blank submissions are not recorded.
        input.set_text("   ");
        input.take_submission();
        assert_eq!(input.history.len(), 1);
    }

    #[test]
    fn test_history_navigation_round_trip() {
        let mut input = InputState::new();
        for text in ["first", "second"] {
            input.set_text(text);
            input.take_submission();
        }
        input.set_text("draft");

        input.history_prev();
        assert_eq!(input.text(), "second");
        input.history_prev();
        assert_eq!(input.text(), "first");
        input.history_next();
        assert_eq!(input.text(), "second");
        input.history_next();
        assert_eq!(input.text(), "draft");
    }
}
