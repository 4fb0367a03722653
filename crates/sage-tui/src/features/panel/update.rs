//! Panel key handling.

use crossterm::event::{KeyCode, KeyEvent};

use super::state::{PanelState, SelectedProduct};

/// What a panel key press asks the reducer to do.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelAction {
    None,
    /// Dismiss the current component.
    Clear,
    /// Open the history overlay.
    OpenHistory,
    /// Add the selected product to the cart.
    AddToCart(SelectedProduct),
    /// Open the try-on studio for the selected product.
    TryOn(SelectedProduct),
    /// Remove the selected cart line; carries (product id, name).
    RemoveFromCart { id: String, name: String },
}

/// Handles a key while the panel has focus.
pub fn handle_key(panel: &mut PanelState, key: KeyEvent) -> PanelAction {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            panel.move_selection(1);
            PanelAction::None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            panel.move_selection(-1);
            PanelAction::None
        }
        KeyCode::Char('c') => PanelAction::Clear,
        KeyCode::Char('h') => PanelAction::OpenHistory,
        KeyCode::Char('a') | KeyCode::Enter => match panel.selected_product() {
            Some(product) => PanelAction::AddToCart(product),
            None => PanelAction::None,
        },
        KeyCode::Char('t') => match panel.selected_product() {
            Some(product) => PanelAction::TryOn(product),
            None => PanelAction::None,
        },
        KeyCode::Char('x') => match panel.selected_cart_item() {
            Some((id, name)) => PanelAction::RemoveFromCart { id, name },
            None => PanelAction::None,
        },
        _ => PanelAction::None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use serde_json::json;

    use super::*;

    fn press(panel: &mut PanelState, code: KeyCode) -> PanelAction {
        handle_key(panel, KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_add_to_cart_requires_selection() {
        let mut panel = PanelState::new();
        assert_eq!(press(&mut panel, KeyCode::Char('a')), PanelAction::None);

        panel.show(
            "ProductGrid",
            &json!({ "products": [{ "id": "1", "name": "Cap", "price": 10.0 }] }),
        );
        let PanelAction::AddToCart(product) = press(&mut panel, KeyCode::Char('a')) else {
            panic!("expected add-to-cart");
        };
        assert_eq!(product.id, "1");
    }

    #[test]
    fn test_remove_requires_cart_component() {
        let mut panel = PanelState::new();
        panel.show(
            "ProductGrid",
            &json!({ "products": [{ "id": "1", "name": "Cap", "price": 10.0 }] }),
        );
        assert_eq!(press(&mut panel, KeyCode::Char('x')), PanelAction::None);

        panel.show(
            "CheckoutWizard",
            &json!({ "cartItems": [{ "id": "1", "name": "Cap", "price": 10.0 }] }),
        );
        assert_eq!(
            press(&mut panel, KeyCode::Char('x')),
            PanelAction::RemoveFromCart {
                id: "1".to_string(),
                name: "Cap".to_string()
            }
        );
    }

    #[test]
    fn test_clear_and_history_keys() {
        let mut panel = PanelState::new();
        assert_eq!(press(&mut panel, KeyCode::Char('c')), PanelAction::Clear);
        assert_eq!(press(&mut panel, KeyCode::Char('h')), PanelAction::OpenHistory);
    }
}
