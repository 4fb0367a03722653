//! Panel state store: the single source of truth for what the panel shows.
//!
//! History is an append-only arena of immutable instances; the current
//! pointer is the only mutable cell. Both the message watcher and
//! user-triggered panel actions write through the same store, so "what is
//! currently shown" and "what has been shown" never disagree.

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{debug, warn};

use crate::components::{self, PanelContent};

/// Stable arena key for a panel instance. Unique for the session lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A validated, renderable snapshot of a directive. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct UiInstance {
    pub id: InstanceId,
    /// The directive's component name, kept verbatim (it may not resolve).
    pub name: String,
    pub content: PanelContent,
    pub timestamp: DateTime<Utc>,
}

/// Session-scoped panel store.
///
/// `set_component` always appends a fresh instance - deduplicating repeated
/// messages is the watcher's job, and render-path callers are expected to
/// gate on content equality before calling. `restore` only repoints the
/// current pointer; history never shrinks during a session.
#[derive(Debug, Default)]
pub struct PanelStore {
    history: Vec<UiInstance>,
    current: Option<InstanceId>,
}

impl PanelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `raw` against the schema for `name`, appends the resulting
    /// instance to history, makes it current, and returns it.
    pub fn set_component(&mut self, name: &str, raw: &Value) -> &UiInstance {
        let id = InstanceId(self.history.len() as u64);
        let instance = UiInstance {
            id,
            name: name.to_string(),
            content: components::validate(name, raw),
            timestamp: Utc::now(),
        };
        debug!(%id, component = name, "panel instance created");
        self.history.push(instance);
        self.current = Some(id);
        // Just pushed, the slot exists.
        &self.history[id.0 as usize]
    }

    /// Repoints the current instance at an entry already in history.
    ///
    /// Returns false (and logs) when the id is unknown; no state changes and
    /// no new history entry either way.
    pub fn restore(&mut self, id: InstanceId) -> bool {
        if self.get(id).is_some() {
            debug!(%id, "panel instance restored");
            self.current = Some(id);
            true
        } else {
            warn!(%id, "restore requested for unknown panel instance");
            false
        }
    }

    /// Clears the panel. History is untouched.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// The currently displayed instance, if any.
    pub fn current(&self) -> Option<&UiInstance> {
        self.current.and_then(|id| self.get(id))
    }

    /// Looks up an instance by arena key.
    pub fn get(&self, id: InstanceId) -> Option<&UiInstance> {
        self.history.get(id.0 as usize)
    }

    /// All instances shown this session, oldest first.
    pub fn history(&self) -> &[UiInstance] {
        &self.history
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::components::ComponentProps;

    #[test]
    fn test_set_component_appends_and_becomes_current() {
        let mut store = PanelStore::new();
        assert!(store.is_empty());

        let id = store
            .set_component("ProductGrid", &json!({ "title": "Shoes" }))
            .id;
        assert_eq!(store.history().len(), 1);
        let current = store.current().unwrap();
        assert_eq!(current.id, id);
        assert_eq!(current.name, "ProductGrid");
        assert!(matches!(
            current.content,
            PanelContent::Component(ComponentProps::ProductGrid(_))
        ));
    }

    #[test]
    fn test_identical_calls_create_distinct_instances() {
        let mut store = PanelStore::new();
        let props = json!({ "products": [{ "name": "Cap", "price": 10 }] });
        let first = store.set_component("ProductGrid", &props).id;
        let second = store.set_component("ProductGrid", &props).id;

        assert_ne!(first, second);
        assert_eq!(store.history().len(), 2);
        assert_eq!(store.current().unwrap().id, second);
    }

    #[test]
    fn test_sequential_sets_keep_call_order_in_history() {
        let mut store = PanelStore::new();
        store.set_component("ProductGrid", &json!({ "products": [{ "price": 10 }] }));
        store.set_component("ProductGrid", &json!({ "products": [{ "price": 20 }] }));

        let history = store.history();
        assert_eq!(history.len(), 2);
        assert!(history[0].id < history[1].id);
        assert_eq!(store.current().unwrap().id, history[1].id);
    }

    #[test]
    fn test_restore_repoints_without_new_entry() {
        let mut store = PanelStore::new();
        let first = store.set_component("ProductGrid", &json!({})).id;
        let first_instance = store.get(first).unwrap().clone();
        store.set_component("CheckoutWizard", &json!({}));

        assert!(store.restore(first));
        assert_eq!(store.history().len(), 2);
        let current = store.current().unwrap();
        assert_eq!(current.id, first);
        assert_eq!(current.timestamp, first_instance.timestamp);
        assert_eq!(current.content, first_instance.content);
    }

    #[test]
    fn test_restore_unknown_id_is_noop() {
        let mut store = PanelStore::new();
        let id = store.set_component("ProductGrid", &json!({})).id;

        assert!(!store.restore(InstanceId(99)));
        assert_eq!(store.current().unwrap().id, id);
        assert_eq!(store.history().len(), 1);
    }

    #[test]
    fn test_clear_keeps_history() {
        let mut store = PanelStore::new();
        let id = store.set_component("ProductGrid", &json!({})).id;
        store.clear();

        assert!(store.is_empty());
        assert!(store.current().is_none());
        assert_eq!(store.history().len(), 1);
        // Cleared instances stay restorable.
        assert!(store.restore(id));
        assert!(!store.is_empty());
    }

    #[test]
    fn test_unregistered_component_stored_not_rejected() {
        let mut store = PanelStore::new();
        let instance = store.set_component("NotRegistered", &json!({ "x": 1 }));
        assert_eq!(instance.name, "NotRegistered");
        assert!(matches!(instance.content, PanelContent::Unregistered(_)));
    }
}
