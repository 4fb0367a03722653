//! Wire types for the backend REST surface.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::chat::ChatMessage;

// ============================================================================
// /chat
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    pub session_id: &'a str,
}

/// The agent's reply: conversational text plus an optional component
/// directive (`ui_component` + `ui_props`).
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub agent_response: String,
    #[serde(default)]
    pub ui_component: Option<String>,
    #[serde(default)]
    pub ui_props: Option<Value>,
    #[serde(default)]
    pub ui_reason: Option<String>,
    #[serde(default)]
    pub context: Option<Value>,
}

impl ChatResponse {
    /// Converts the reply into an assistant message for the transcript
    /// thread.
    ///
    /// When the agent named a component, the message content becomes a block
    /// array with the text (if any) followed by a tagged component block -
    /// the shape the message watcher extracts directives from. Otherwise it
    /// is plain text.
    pub fn into_message(self) -> ChatMessage {
        match self.ui_component {
            Some(component) if !component.is_empty() => {
                let mut blocks = Vec::new();
                if !self.agent_response.is_empty() {
                    blocks.push(json!({ "type": "text", "text": self.agent_response }));
                }
                blocks.push(json!({
                    "type": "component",
                    "component": component,
                    "props": self.ui_props.unwrap_or_else(|| json!({})),
                }));
                ChatMessage::assistant_blocks(blocks)
            }
            _ => ChatMessage::assistant(self.agent_response),
        }
    }
}

// ============================================================================
// /cart
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CartAddRequest<'a> {
    pub session_id: &'a str,
    pub product_id: &'a str,
    pub product_name: &'a str,
    pub price: f64,
    pub image: &'a str,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CartRemoveRequest<'a> {
    pub session_id: &'a str,
    pub product_id: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CartLine {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default = "one")]
    pub quantity: u32,
}

fn one() -> u32 {
    1
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CartView {
    #[serde(default)]
    pub cart: Vec<CartLine>,
    #[serde(default)]
    pub total_items: u32,
    #[serde(default)]
    pub total_price: f64,
}

// ============================================================================
// /checkout
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShippingDetails {
    pub name: String,
    pub address: String,
    pub city: String,
    pub zip: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderConfirmation {
    pub order_id: String,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub items: Vec<Value>,
}

/// Raw checkout reply: the backend reports cart problems as
/// `{"status": "error", "message": ...}` on a 200.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub order: Option<OrderConfirmation>,
}

// ============================================================================
// /auth
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest<'a> {
    pub email: &'a str,
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: AuthUser,
}

// ============================================================================
// /export/pdf, /virtual-tryon
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ExportRequest<'a> {
    pub session_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_all: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TryOnResponse {
    #[serde(default)]
    pub status: Option<String>,
    /// Base64-encoded PNG of the rendered try-on.
    #[serde(default)]
    pub result_image: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::chat::MessageContent;
    use crate::directive;

    #[test]
    fn test_chat_response_with_component_becomes_blocks() {
        let response: ChatResponse = serde_json::from_value(json!({
            "agent_response": "Found a few options",
            "ui_component": "ProductGrid",
            "ui_props": { "products": [] },
            "context": {}
        }))
        .unwrap();

        let message = response.into_message();
        let MessageContent::Blocks(blocks) = &message.content else {
            panic!("expected blocks");
        };
        assert_eq!(blocks.len(), 2);

        // The watcher must be able to pick the directive back out.
        let extracted = directive::extract(&message.content).unwrap();
        assert_eq!(extracted.name, "ProductGrid");
    }

    #[test]
    fn test_chat_response_text_only() {
        let response: ChatResponse =
            serde_json::from_value(json!({ "agent_response": "Hello!" })).unwrap();
        let message = response.into_message();
        assert_eq!(message.content, MessageContent::Text("Hello!".to_string()));
    }

    #[test]
    fn test_chat_response_empty_component_is_text() {
        let response: ChatResponse = serde_json::from_value(json!({
            "agent_response": "Nothing to show",
            "ui_component": ""
        }))
        .unwrap();
        assert!(matches!(
            response.into_message().content,
            MessageContent::Text(_)
        ));
    }

    #[test]
    fn test_chat_response_component_without_text() {
        let response: ChatResponse = serde_json::from_value(json!({
            "ui_component": "LoginForm"
        }))
        .unwrap();
        let message = response.into_message();
        let MessageContent::Blocks(blocks) = &message.content else {
            panic!("expected blocks");
        };
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0]["props"], json!({}));
    }
}
