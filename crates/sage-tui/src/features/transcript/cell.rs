//! Transcript cell types.

/// One rendered entry in the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryCell {
    /// User prompt.
    User { content: String },
    /// Assistant reply text.
    Assistant { content: String },
    /// Informational line from the client itself.
    System { content: String },
    /// Failure surfaced to the user (backend/network problems).
    Error { content: String },
}

impl HistoryCell {
    pub fn user(content: impl Into<String>) -> Self {
        HistoryCell::User {
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        HistoryCell::Assistant {
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        HistoryCell::System {
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        HistoryCell::Error {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        match self {
            HistoryCell::User { content }
            | HistoryCell::Assistant { content }
            | HistoryCell::System { content }
            | HistoryCell::Error { content } => content,
        }
    }
}
