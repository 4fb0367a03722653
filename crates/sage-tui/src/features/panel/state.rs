//! Panel display state.
//!
//! Wraps the session [`PanelStore`] with a row selection for list-like
//! components. The store itself is owned here but written to both by the
//! message watcher (via the reducer) and by panel actions.

use sage_core::components::{ComponentProps, PanelContent};
use sage_core::panel::{InstanceId, PanelStore, UiInstance};
use serde_json::Value;

/// A product picked out of the current component, for cart/try-on actions.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedProduct {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub category: Option<String>,
}

#[derive(Debug, Default)]
pub struct PanelState {
    pub store: PanelStore,
    /// Selected row in the current component's primary list.
    pub selected: usize,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and shows a component, resetting the selection.
    pub fn show(&mut self, name: &str, raw: &Value) -> &UiInstance {
        self.selected = 0;
        self.store.set_component(name, raw)
    }

    /// Restores a history entry, resetting the selection on success.
    pub fn restore(&mut self, id: InstanceId) -> bool {
        let restored = self.store.restore(id);
        if restored {
            self.selected = 0;
        }
        restored
    }

    pub fn clear(&mut self) {
        self.store.clear();
        self.selected = 0;
    }

    /// Moves the selection by `delta`, clamped to the current component's
    /// selectable rows.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.selectable_len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let next = self.selected.saturating_add_signed(delta);
        self.selected = next.min(len - 1);
    }

    /// Number of selectable rows in the current component.
    pub fn selectable_len(&self) -> usize {
        match self.current_props() {
            Some(ComponentProps::ProductGrid(props)) => props.products.len(),
            Some(ComponentProps::ComparisonTable(props)) => props.products.len(),
            Some(ComponentProps::DealBadgePanel(props)) => props.deals.len(),
            Some(ComponentProps::CheckoutWizard(props)) => props.cart_items.len(),
            Some(ComponentProps::SmartCartOptimizer(props)) => props.cart_items.len(),
            Some(ComponentProps::BundleBuilder(props)) => props.accessories.len(),
            Some(ComponentProps::OrderHistory(props)) => props.orders.len(),
            _ => 0,
        }
    }

    /// The product under the selection, if the current component lists
    /// products that can be acted on.
    pub fn selected_product(&self) -> Option<SelectedProduct> {
        match self.current_props()? {
            ComponentProps::ProductGrid(props) => {
                props.products.get(self.selected).map(|p| SelectedProduct {
                    id: p.id.clone(),
                    name: p.name.clone(),
                    price: p.price,
                    image: p.image.clone(),
                    category: p.category.clone(),
                })
            }
            ComponentProps::ComparisonTable(props) => {
                props.products.get(self.selected).map(|p| SelectedProduct {
                    id: p.id.clone(),
                    name: p.name.clone(),
                    price: p.price,
                    image: p.image.clone(),
                    category: None,
                })
            }
            ComponentProps::DealBadgePanel(props) => {
                props.deals.get(self.selected).map(|d| SelectedProduct {
                    id: d.id.clone(),
                    name: d.name.clone(),
                    price: d.sale_price,
                    image: d.image.clone(),
                    category: None,
                })
            }
            _ => None,
        }
    }

    /// The cart line under the selection, if the current component lists
    /// removable cart items.
    pub fn selected_cart_item(&self) -> Option<(String, String)> {
        let items = match self.current_props()? {
            ComponentProps::CheckoutWizard(props) => &props.cart_items,
            ComponentProps::SmartCartOptimizer(props) => &props.cart_items,
            _ => return None,
        };
        items
            .get(self.selected)
            .map(|item| (item.id.clone(), item.name.clone()))
    }

    fn current_props(&self) -> Option<&ComponentProps> {
        match &self.store.current()?.content {
            PanelContent::Component(props) => Some(props),
            PanelContent::Unregistered(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn grid(panel: &mut PanelState, count: usize) {
        let products: Vec<Value> = (0..count)
            .map(|i| json!({ "id": i.to_string(), "name": format!("P{i}"), "price": 1.0 }))
            .collect();
        panel.show("ProductGrid", &json!({ "products": products }));
    }

    #[test]
    fn test_selection_clamps_to_rows() {
        let mut panel = PanelState::new();
        grid(&mut panel, 3);

        panel.move_selection(1);
        panel.move_selection(10);
        assert_eq!(panel.selected, 2);
        panel.move_selection(-5);
        assert_eq!(panel.selected, 0);
    }

    #[test]
    fn test_show_resets_selection() {
        let mut panel = PanelState::new();
        grid(&mut panel, 3);
        panel.move_selection(2);
        grid(&mut panel, 1);
        assert_eq!(panel.selected, 0);
    }

    #[test]
    fn test_selected_product_from_grid() {
        let mut panel = PanelState::new();
        grid(&mut panel, 2);
        panel.move_selection(1);
        let product = panel.selected_product().unwrap();
        assert_eq!(product.id, "1");
        assert_eq!(product.name, "P1");
    }

    #[test]
    fn test_no_selection_on_formless_component() {
        let mut panel = PanelState::new();
        panel.show("LoginForm", &json!({}));
        assert_eq!(panel.selectable_len(), 0);
        assert!(panel.selected_product().is_none());
    }
}
