//! Directive extraction and field-alias normalization.
//!
//! The agent names the component it wants rendered either in a content block
//! tagged `type: "component"`, in an untagged block that carries both a
//! component identifier and a props payload, or directly on a structured
//! message body. Field aliases (`component`/`name`, `props`/`data`) are
//! resolved here and nowhere else - downstream code only ever sees the
//! canonical [`ComponentDirective`] shape.

use serde_json::Value;

use crate::chat::MessageContent;

/// The extracted intent from a message: which component to render, with what
/// raw (not yet validated) props.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDirective {
    pub name: String,
    pub props: Value,
}

/// Extracts a directive from message content, if it carries one.
///
/// Plain text never yields a directive. For block arrays, the first block
/// explicitly tagged `type: "component"` wins; failing that, the first block
/// with both a component identifier and a props-like field.
pub fn extract(content: &MessageContent) -> Option<ComponentDirective> {
    match content {
        MessageContent::Text(_) => None,
        MessageContent::Object(value) => from_value(value, false),
        MessageContent::Blocks(blocks) => {
            if let Some(block) = blocks
                .iter()
                .find(|block| block.get("type").and_then(Value::as_str) == Some("component"))
            {
                return from_value(block, false);
            }
            blocks.iter().find_map(|block| from_value(block, true))
        }
    }
}

/// Normalizes one candidate value into a directive.
///
/// `require_props` is set for untagged blocks: without the explicit tag, a
/// bare `name` field is too weak a signal, so a props payload must also be
/// present.
fn from_value(value: &Value, require_props: bool) -> Option<ComponentDirective> {
    let name = value
        .get("component")
        .or_else(|| value.get("name"))
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())?;

    let props = value.get("props").or_else(|| value.get("data"));
    if require_props && props.is_none() {
        return None;
    }

    Some(ComponentDirective {
        name: name.to_string(),
        props: props.cloned().unwrap_or_else(|| Value::Object(Default::default())),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn blocks(values: Vec<Value>) -> MessageContent {
        MessageContent::Blocks(values)
    }

    #[test]
    fn test_plain_text_yields_nothing() {
        let content = MessageContent::Text("Here are some options".to_string());
        assert_eq!(extract(&content), None);
    }

    #[test]
    fn test_tagged_component_block() {
        let content = blocks(vec![
            json!({ "type": "text", "text": "Take a look:" }),
            json!({
                "type": "component",
                "component": "ProductGrid",
                "props": { "products": [] }
            }),
        ]);
        let directive = extract(&content).unwrap();
        assert_eq!(directive.name, "ProductGrid");
        assert_eq!(directive.props, json!({ "products": [] }));
    }

    #[test]
    fn test_tagged_block_defaults_missing_props() {
        let content = blocks(vec![json!({ "type": "component", "name": "LoginForm" })]);
        let directive = extract(&content).unwrap();
        assert_eq!(directive.name, "LoginForm");
        assert_eq!(directive.props, json!({}));
    }

    #[test]
    fn test_untagged_block_needs_identifier_and_props() {
        // Identifier alone is not enough without the explicit tag.
        let content = blocks(vec![json!({ "name": "ProductGrid" })]);
        assert_eq!(extract(&content), None);

        let content = blocks(vec![json!({
            "component": "ProductGrid",
            "props": { "title": "Shoes" }
        })]);
        let directive = extract(&content).unwrap();
        assert_eq!(directive.name, "ProductGrid");
    }

    #[test]
    fn test_component_alias_wins_over_name() {
        let content = blocks(vec![json!({
            "type": "component",
            "component": "ProductGrid",
            "name": "Ignored",
            "props": {}
        })]);
        assert_eq!(extract(&content).unwrap().name, "ProductGrid");
    }

    #[test]
    fn test_data_alias_for_props() {
        let content = blocks(vec![json!({
            "type": "component",
            "component": "DealBadgePanel",
            "data": { "deals": [] }
        })]);
        assert_eq!(extract(&content).unwrap().props, json!({ "deals": [] }));
    }

    #[test]
    fn test_object_content_accepted_directly() {
        let content = MessageContent::Object(json!({
            "name": "UserProfile",
            "data": { "total_orders": 2 }
        }));
        let directive = extract(&content).unwrap();
        assert_eq!(directive.name, "UserProfile");
        assert_eq!(directive.props, json!({ "total_orders": 2 }));
    }

    #[test]
    fn test_object_without_identifier_yields_nothing() {
        let content = MessageContent::Object(json!({ "text": "just metadata" }));
        assert_eq!(extract(&content), None);
    }

    #[test]
    fn test_first_component_block_wins() {
        let content = blocks(vec![
            json!({ "type": "component", "component": "First", "props": {} }),
            json!({ "type": "component", "component": "Second", "props": {} }),
        ]);
        assert_eq!(extract(&content).unwrap().name, "First");
    }

    #[test]
    fn test_non_string_identifier_rejected() {
        let content = MessageContent::Object(json!({ "component": 42, "props": {} }));
        assert_eq!(extract(&content), None);
    }
}
