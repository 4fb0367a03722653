//! Transcript display state.

use super::HistoryCell;

/// Transcript state: cells plus a line-based scroll position.
///
/// Scrolling follows the latest line by default; scrolling up anchors at an
/// offset from the top, and scrolling back past the bottom resumes
/// following.
#[derive(Debug, Default)]
pub struct TranscriptState {
    cells: Vec<HistoryCell>,
    /// Anchored offset in wrapped lines from the top, or None to follow.
    pub scroll_offset: Option<usize>,
    /// Total wrapped line count from the last render (scroll clamping).
    pub last_line_count: usize,
    /// Viewport height from the last render.
    pub viewport_height: usize,
}

impl TranscriptState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[HistoryCell] {
        &self.cells
    }

    /// Appends a cell and snaps back to following the latest output.
    pub fn push_cell(&mut self, cell: HistoryCell) {
        self.cells.push(cell);
        self.scroll_offset = None;
    }

    pub fn is_following(&self) -> bool {
        self.scroll_offset.is_none()
    }

    pub fn scroll_up(&mut self, lines: usize) {
        let max_offset = self.last_line_count.saturating_sub(self.viewport_height);
        let current = self.scroll_offset.unwrap_or(max_offset);
        self.scroll_offset = Some(current.saturating_sub(lines));
    }

    pub fn scroll_down(&mut self, lines: usize) {
        let max_offset = self.last_line_count.saturating_sub(self.viewport_height);
        if let Some(offset) = self.scroll_offset {
            let next = offset + lines;
            // Reaching the bottom resumes following.
            self.scroll_offset = (next < max_offset).then_some(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_lines(total: usize, viewport: usize) -> TranscriptState {
        let mut state = TranscriptState::new();
        state.last_line_count = total;
        state.viewport_height = viewport;
        state
    }

    #[test]
    fn test_push_snaps_to_follow() {
        let mut state = state_with_lines(100, 20);
        state.scroll_up(10);
        assert!(!state.is_following());

        state.push_cell(HistoryCell::system("new"));
        assert!(state.is_following());
    }

    #[test]
    fn test_scroll_down_past_bottom_resumes_follow() {
        let mut state = state_with_lines(100, 20);
        state.scroll_up(5); // anchored at 75
        state.scroll_down(3);
        assert!(!state.is_following());
        state.scroll_down(10);
        assert!(state.is_following());
    }

    #[test]
    fn test_scroll_up_clamps_at_top() {
        let mut state = state_with_lines(30, 20);
        state.scroll_up(500);
        assert_eq!(state.scroll_offset, Some(0));
    }
}
