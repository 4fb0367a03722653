//! Chat message model shared between the backend client and the TUI.
//!
//! Messages form an append-only sequence owned by the transcript thread. The
//! core only ever reads them; nothing mutates a message after it is appended.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// Message content - plain text, a single structured payload, or a list of
/// content blocks.
///
/// Blocks stay as raw JSON values here. The agent is free to shape them
/// however it likes; `directive::extract` is the single place that makes
/// sense of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<Value>),
    Object(Value),
}

impl MessageContent {
    /// Returns the displayable text of this content, if any.
    ///
    /// Block arrays contribute their `text` fields joined by newlines;
    /// structured payloads with no text field display as nothing.
    pub fn display_text(&self) -> Option<String> {
        match self {
            MessageContent::Text(text) => (!text.is_empty()).then(|| text.clone()),
            MessageContent::Blocks(blocks) => {
                let text: Vec<&str> = blocks
                    .iter()
                    .filter_map(|block| block.get("text").and_then(Value::as_str))
                    .collect();
                (!text.is_empty()).then(|| text.join("\n"))
            }
            MessageContent::Object(value) => value
                .get("text")
                .and_then(Value::as_str)
                .filter(|text| !text.is_empty())
                .map(str::to_string),
        }
    }
}

/// A chat message with owned data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: MessageContent,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Text(content.into()),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: MessageContent::Text(content.into()),
        }
    }

    /// Creates an assistant message with content blocks.
    pub fn assistant_blocks(blocks: Vec<Value>) -> Self {
        Self {
            role: Role::Assistant,
            content: MessageContent::Blocks(blocks),
        }
    }
}
