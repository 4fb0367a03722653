//! Message watcher: turns the growing message sequence into directives.
//!
//! The watcher is invoked every time the transcript thread changes (and is
//! safe to invoke redundantly - re-renders, duplicate notifications). It
//! yields at most one directive per newly observed assistant message and
//! never processes the same message index twice.

use tracing::debug;

use crate::chat::{ChatMessage, Role};
use crate::directive::{self, ComponentDirective};

/// Observes an append-only message sequence and extracts component
/// directives from newly arrived assistant messages.
#[derive(Debug, Default)]
pub struct MessageWatcher {
    /// Index of the last message that produced a directive.
    last_processed: Option<usize>,
}

impl MessageWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inspects the latest message and returns a directive if it carries one.
    ///
    /// The processed index is advanced only when a directive is emitted, so
    /// a user message at the tail is revisited once the assistant replies,
    /// and a directive-less assistant reply is simply skipped. Once an index
    /// is marked it is never reprocessed: messages are immutable after
    /// append, so there is nothing new to see.
    pub fn observe(&mut self, messages: &[ChatMessage]) -> Option<ComponentDirective> {
        let last_index = messages.len().checked_sub(1)?;
        if self.last_processed == Some(last_index) {
            return None;
        }

        let message = &messages[last_index];
        if message.role != Role::Assistant {
            return None;
        }

        let directive = directive::extract(&message.content)?;
        // Mark before handing the directive out so a re-entrant call cannot
        // dispatch the same message twice.
        self.last_processed = Some(last_index);
        debug!(index = last_index, component = %directive.name, "directive extracted");
        Some(directive)
    }

    /// Index of the last message that yielded a directive, if any.
    pub fn last_processed(&self) -> Option<usize> {
        self.last_processed
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn component_reply(name: &str) -> ChatMessage {
        ChatMessage::assistant_blocks(vec![
            json!({ "type": "text", "text": "Here you go" }),
            json!({ "type": "component", "component": name, "props": {} }),
        ])
    }

    #[test]
    fn test_emits_directive_for_assistant_component_block() {
        let mut watcher = MessageWatcher::new();
        let messages = vec![ChatMessage::user("show shoes"), component_reply("ProductGrid")];

        let directive = watcher.observe(&messages).unwrap();
        assert_eq!(directive.name, "ProductGrid");
        assert_eq!(watcher.last_processed(), Some(1));
    }

    #[test]
    fn test_same_index_processed_at_most_once() {
        let mut watcher = MessageWatcher::new();
        let messages = vec![ChatMessage::user("show shoes"), component_reply("ProductGrid")];

        assert!(watcher.observe(&messages).is_some());
        // Re-invocation on an unchanged sequence is a no-op.
        assert!(watcher.observe(&messages).is_none());
        assert!(watcher.observe(&messages).is_none());
    }

    #[test]
    fn test_user_message_not_marked() {
        let mut watcher = MessageWatcher::new();
        let mut messages = vec![ChatMessage::user("show shoes")];
        assert!(watcher.observe(&messages).is_none());
        assert_eq!(watcher.last_processed(), None);

        // Once the assistant replies at the next index, it is picked up.
        messages.push(component_reply("ProductGrid"));
        assert!(watcher.observe(&messages).is_some());
    }

    #[test]
    fn test_plain_text_reply_skipped() {
        let mut watcher = MessageWatcher::new();
        let messages = vec![
            ChatMessage::user("hi"),
            ChatMessage::assistant("Hello! What are you shopping for?"),
        ];
        assert!(watcher.observe(&messages).is_none());
        assert_eq!(watcher.last_processed(), None);
    }

    #[test]
    fn test_empty_sequence() {
        let mut watcher = MessageWatcher::new();
        assert!(watcher.observe(&[]).is_none());
    }

    #[test]
    fn test_each_new_assistant_message_yields_once() {
        let mut watcher = MessageWatcher::new();
        let mut messages = vec![ChatMessage::user("shoes"), component_reply("ProductGrid")];
        assert!(watcher.observe(&messages).is_some());

        messages.push(ChatMessage::user("compare them"));
        assert!(watcher.observe(&messages).is_none());

        messages.push(component_reply("ComparisonTable"));
        let directive = watcher.observe(&messages).unwrap();
        assert_eq!(directive.name, "ComparisonTable");
        assert!(watcher.observe(&messages).is_none());
    }
}
