//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects. This is the single source of truth for
//! how events modify state - including the watcher step that turns freshly
//! appended assistant messages into panel instances.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use sage_core::backend::types::CartView;
use sage_core::chat::ChatMessage;
use sage_core::components::{ComponentProps, PanelContent};
use serde_json::{Value, json};

use crate::effects::UiEffect;
use crate::events::{BackendEvent, CartAction, UiEvent};
use crate::features::input::{self, Command, Submission};
use crate::features::panel::{self, PanelAction, SelectedProduct};
use crate::features::transcript::HistoryCell;
use crate::overlays::{self, HistoryOverlay, Overlay, OverlayOutcome};
use crate::state::{AppState, Focus, TuiState};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(terminal_event) => handle_terminal_event(app, terminal_event),
        UiEvent::Backend(backend_event) => handle_backend_event(&mut app.tui, backend_event),
    }
}

// ============================================================================
// Terminal events
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
            handle_key(app, key)
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // An open overlay captures everything.
    if let Some(mut overlay) = app.overlay.take() {
        match overlays::handle_overlay_key(&mut app.tui, &mut overlay, key) {
            OverlayOutcome::Stay => app.overlay = Some(overlay),
            OverlayOutcome::Close => {}
        }
        return vec![];
    }

    // Global keys.
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return vec![UiEffect::Quit];
        }
        KeyCode::Tab => {
            app.tui.focus = match app.tui.focus {
                Focus::Input => Focus::Panel,
                Focus::Panel => Focus::Input,
            };
            return vec![];
        }
        KeyCode::PageUp => {
            app.tui.transcript.scroll_up(10);
            return vec![];
        }
        KeyCode::PageDown => {
            app.tui.transcript.scroll_down(10);
            return vec![];
        }
        KeyCode::Esc if app.tui.focus == Focus::Panel => {
            app.tui.focus = Focus::Input;
            return vec![];
        }
        _ => {}
    }

    match app.tui.focus {
        Focus::Input => match input::handle_key(&mut app.tui.input, key) {
            Some(submission) => apply_submission(app, submission),
            None => vec![],
        },
        Focus::Panel => {
            let action = panel::handle_key(&mut app.tui.panel, key);
            apply_panel_action(app, action)
        }
    }
}

// ============================================================================
// Input submissions
// ============================================================================

fn apply_submission(app: &mut AppState, submission: Submission) -> Vec<UiEffect> {
    let tui = &mut app.tui;
    match submission {
        Submission::Chat(text) => {
            if tui.thread.pending {
                tui.transcript.push_cell(HistoryCell::system(
                    "Still waiting for the assistant - try again in a moment.",
                ));
                return vec![];
            }
            tui.transcript.push_cell(HistoryCell::user(&text));
            tui.thread.push(ChatMessage::user(&text));
            tui.thread.pending = true;
            vec![UiEffect::SendChat { message: text }]
        }
        Submission::Command(command) => apply_command(app, command),
        Submission::Invalid(usage) => {
            app.tui.transcript.push_cell(HistoryCell::system(usage));
            vec![]
        }
    }
}

fn apply_command(app: &mut AppState, command: Command) -> Vec<UiEffect> {
    let tui = &mut app.tui;
    match command {
        Command::Help => {
            tui.transcript.push_cell(HistoryCell::system(input::HELP));
            vec![]
        }
        Command::Quit => vec![UiEffect::Quit],
        Command::Clear => {
            tui.panel.clear();
            tui.transcript.push_cell(HistoryCell::system("Panel cleared."));
            vec![]
        }
        Command::History => {
            app.overlay = Some(Overlay::History(HistoryOverlay::new()));
            vec![]
        }
        Command::Cart => vec![UiEffect::FetchCart],
        Command::Export => {
            tui.transcript.push_cell(HistoryCell::system("Exporting your orders..."));
            vec![UiEffect::ExportPdf]
        }
        Command::Login { email, password } => vec![UiEffect::Login { email, password }],
        Command::Signup {
            email,
            username,
            password,
        } => vec![UiEffect::Signup {
            email,
            username,
            password,
        }],
        Command::Checkout { shipping } => {
            tui.transcript
                .push_cell(HistoryCell::system(format!("Placing order for {}...", shipping.name)));
            vec![UiEffect::Checkout { shipping }]
        }
        Command::TryOn {
            product_id,
            image_path,
        } => {
            tui.transcript
                .push_cell(HistoryCell::system("Generating your try-on image..."));
            vec![UiEffect::VirtualTryOn {
                product_id,
                image_path,
            }]
        }
    }
}

// ============================================================================
// Panel actions
// ============================================================================

fn apply_panel_action(app: &mut AppState, action: PanelAction) -> Vec<UiEffect> {
    let tui = &mut app.tui;
    match action {
        PanelAction::None => vec![],
        PanelAction::Clear => {
            tui.panel.clear();
            tui.transcript.push_cell(HistoryCell::system("Panel cleared."));
            vec![]
        }
        PanelAction::OpenHistory => {
            app.overlay = Some(Overlay::History(HistoryOverlay::new()));
            vec![]
        }
        PanelAction::AddToCart(product) => {
            tui.transcript
                .push_cell(HistoryCell::system(format!("Adding {} to cart...", product.name)));
            vec![UiEffect::AddToCart {
                product_id: product.id,
                product_name: product.name,
                price: product.price,
                image: product.image,
                quantity: 1,
            }]
        }
        PanelAction::TryOn(product) => {
            open_tryon_studio(tui, &product);
            vec![]
        }
        PanelAction::RemoveFromCart { id, name } => {
            tui.transcript
                .push_cell(HistoryCell::system(format!("Removing {name} from cart...")));
            vec![UiEffect::RemoveFromCart { product_id: id }]
        }
    }
}

/// Opens the try-on studio for a product - the programmatic `set_component`
/// path. Gated on content equality: re-triggering for the product already
/// shown must not grow history.
fn open_tryon_studio(tui: &mut TuiState, product: &SelectedProduct) {
    if let Some(instance) = tui.panel.store.current()
        && let PanelContent::Component(ComponentProps::TryOnStudio(props)) = &instance.content
        && props.product.id == product.id
    {
        return;
    }

    let props = json!({
        "product": {
            "id": product.id,
            "name": product.name,
            "image": product.image,
            "category": product.category.clone().unwrap_or_else(|| "Apparel".to_string()),
        }
    });
    tui.panel.show("TryOnStudio", &props);
    tui.transcript
        .push_cell(HistoryCell::system(format!("TryOnStudio shown for {}", product.name)));
}

// ============================================================================
// Backend events
// ============================================================================

fn handle_backend_event(tui: &mut TuiState, event: BackendEvent) -> Vec<UiEffect> {
    match event {
        BackendEvent::ChatCompleted { result } => {
            tui.thread.pending = false;
            match result {
                Ok(response) => {
                    let message = response.into_message();
                    if let Some(text) = message.content.display_text() {
                        tui.transcript.push_cell(HistoryCell::assistant(text));
                    }
                    tui.thread.push(message);
                    process_directives(tui);
                }
                Err(error) => {
                    tui.transcript
                        .push_cell(HistoryCell::error(format!("Chat failed: {error}")));
                }
            }
            vec![]
        }
        BackendEvent::CartUpdated { action, result } => {
            match result {
                Ok(view) => match action {
                    CartAction::Added => {
                        tui.transcript.push_cell(HistoryCell::system(format!(
                            "Added to cart ({} items).",
                            view.total_items
                        )));
                    }
                    CartAction::Removed => {
                        tui.transcript.push_cell(HistoryCell::system(format!(
                            "Removed from cart ({} items left).",
                            view.total_items
                        )));
                    }
                    CartAction::Viewed => {
                        tui.panel.show("CheckoutWizard", &cart_props(&view));
                        tui.transcript.push_cell(HistoryCell::system(format!(
                            "Your cart: {} items, {}.",
                            view.total_items,
                            format_price(view.total_price)
                        )));
                    }
                },
                Err(error) => {
                    tui.transcript
                        .push_cell(HistoryCell::error(format!("Cart update failed: {error}")));
                }
            }
            vec![]
        }
        BackendEvent::CheckoutCompleted { result } => {
            match result {
                Ok(order) => {
                    tui.transcript.push_cell(HistoryCell::system(format!(
                        "Order {} confirmed - total {}.",
                        order.order_id,
                        format_price(order.total)
                    )));
                }
                Err(error) => {
                    tui.transcript
                        .push_cell(HistoryCell::error(format!("Checkout failed: {error}")));
                }
            }
            vec![]
        }
        BackendEvent::ExportCompleted { result } => {
            match result {
                Ok(path) => {
                    tui.transcript.push_cell(HistoryCell::system(format!(
                        "PDF saved to {}.",
                        path.display()
                    )));
                }
                Err(error) => {
                    tui.transcript
                        .push_cell(HistoryCell::error(format!("Export failed: {error}")));
                }
            }
            vec![]
        }
        BackendEvent::LoggedIn { result } => {
            match result {
                Ok(session) => {
                    tui.transcript.push_cell(HistoryCell::system(format!(
                        "Logged in as {}.",
                        session.user.username
                    )));
                    tui.auth = Some(session);
                }
                Err(error) => {
                    tui.transcript
                        .push_cell(HistoryCell::error(format!("Login failed: {error}")));
                }
            }
            vec![]
        }
        BackendEvent::TryOnCompleted { product_id, result } => {
            match result {
                Ok(path) => {
                    tui.transcript.push_cell(HistoryCell::system(format!(
                        "Try-on image saved to {}.",
                        path.display()
                    )));
                    attach_tryon_result(tui, &product_id, &path.display().to_string());
                }
                Err(error) => {
                    tui.transcript
                        .push_cell(HistoryCell::error(format!("Try-on failed: {error}")));
                }
            }
            vec![]
        }
    }
}

/// Runs the watcher over the thread and projects any new directive onto the
/// panel.
fn process_directives(tui: &mut TuiState) {
    if let Some(directive) = tui.thread.watcher.observe(&tui.thread.messages) {
        let instance = tui.panel.show(&directive.name, &directive.props);
        let name = instance.name.clone();
        tui.transcript
            .push_cell(HistoryCell::system(format!("{name} shown in the panel.")));
    }
}

/// Re-shows the try-on studio with the generated result attached, if the
/// studio for that product is still the current view and has no result yet.
fn attach_tryon_result(tui: &mut TuiState, product_id: &str, result_url: &str) {
    let Some(instance) = tui.panel.store.current() else {
        return;
    };
    let PanelContent::Component(ComponentProps::TryOnStudio(props)) = &instance.content else {
        return;
    };
    if props.product.id != product_id || props.tryon_result_url.as_deref() == Some(result_url) {
        return;
    }

    let props = json!({
        "product": {
            "id": props.product.id,
            "name": props.product.name,
            "image": props.product.image,
            "category": props.product.category,
        },
        "tryonResultUrl": result_url,
        "tips": props.tips,
    });
    tui.panel.show("TryOnStudio", &props);
}

fn cart_props(view: &CartView) -> Value {
    let items: Vec<Value> = view
        .cart
        .iter()
        .map(|line| {
            json!({
                "id": line.id,
                "name": line.name,
                "price": line.price,
                "quantity": line.quantity,
                "image": line.image,
            })
        })
        .collect();
    json!({ "cartItems": items })
}

fn format_price(value: f64) -> String {
    format!("${value:.2}")
}

#[cfg(test)]
mod tests {
    use sage_core::backend::types::ChatResponse;
    use sage_core::backend::{BackendError, BackendErrorKind};
    use sage_core::config::Config;

    use super::*;

    fn new_app() -> AppState {
        AppState::new(Config::default(), "test-session".to_string())
    }

    fn chat_response(value: serde_json::Value) -> ChatResponse {
        serde_json::from_value(value).unwrap()
    }

    fn press(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn type_line(app: &mut AppState, text: &str) -> Vec<UiEffect> {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter)
    }

    #[test]
    fn test_chat_submission_sends_effect_and_appends_message() {
        let mut app = new_app();
        let effects = type_line(&mut app, "show me shoes");
        assert_eq!(
            effects,
            vec![UiEffect::SendChat {
                message: "show me shoes".to_string()
            }]
        );
        assert_eq!(app.tui.thread.messages.len(), 1);
        assert!(app.tui.thread.pending);
    }

    #[test]
    fn test_chat_rejected_while_pending() {
        let mut app = new_app();
        type_line(&mut app, "first");
        let effects = type_line(&mut app, "second");
        assert!(effects.is_empty());
        assert_eq!(app.tui.thread.messages.len(), 1);
    }

    #[test]
    fn test_component_reply_transitions_empty_to_showing() {
        let mut app = new_app();
        type_line(&mut app, "show me shoes");
        assert!(app.tui.panel.store.is_empty());

        update(
            &mut app,
            UiEvent::Backend(BackendEvent::ChatCompleted {
                result: Ok(chat_response(serde_json::json!({
                    "agent_response": "Here are some shoes",
                    "ui_component": "ProductGrid",
                    "ui_props": { "products": [{ "name": "Runner", "price": 49.99 }] }
                }))),
            }),
        );

        assert!(!app.tui.thread.pending);
        let current = app.tui.panel.store.current().unwrap();
        assert_eq!(current.name, "ProductGrid");
        assert!(matches!(
            current.content,
            PanelContent::Component(ComponentProps::ProductGrid(_))
        ));
    }

    #[test]
    fn test_plain_text_reply_leaves_panel_unchanged() {
        let mut app = new_app();
        type_line(&mut app, "hello");
        update(
            &mut app,
            UiEvent::Backend(BackendEvent::ChatCompleted {
                result: Ok(chat_response(serde_json::json!({
                    "agent_response": "Here are some options"
                }))),
            }),
        );
        assert!(app.tui.panel.store.is_empty());
        assert!(app.tui.panel.store.history().is_empty());
    }

    #[test]
    fn test_redundant_events_do_not_reprocess_messages() {
        let mut app = new_app();
        type_line(&mut app, "show me shoes");
        update(
            &mut app,
            UiEvent::Backend(BackendEvent::ChatCompleted {
                result: Ok(chat_response(serde_json::json!({
                    "agent_response": "Shoes",
                    "ui_component": "ProductGrid",
                    "ui_props": {}
                }))),
            }),
        );
        assert_eq!(app.tui.panel.store.history().len(), 1);

        // Ticks and unrelated events re-enter the reducer but must not
        // produce a second panel update for the same message index.
        for _ in 0..3 {
            update(&mut app, UiEvent::Tick);
        }
        assert_eq!(app.tui.panel.store.history().len(), 1);
    }

    #[test]
    fn test_unregistered_component_is_shown_as_unresolvable() {
        let mut app = new_app();
        type_line(&mut app, "surprise me");
        update(
            &mut app,
            UiEvent::Backend(BackendEvent::ChatCompleted {
                result: Ok(chat_response(serde_json::json!({
                    "agent_response": "Behold",
                    "ui_component": "HoloDeck",
                    "ui_props": { "x": 1 }
                }))),
            }),
        );
        let current = app.tui.panel.store.current().unwrap();
        assert_eq!(current.name, "HoloDeck");
        assert!(matches!(current.content, PanelContent::Unregistered(_)));
    }

    #[test]
    fn test_chat_error_surfaces_and_clears_pending() {
        let mut app = new_app();
        type_line(&mut app, "hello");
        update(
            &mut app,
            UiEvent::Backend(BackendEvent::ChatCompleted {
                result: Err(BackendError::new(BackendErrorKind::Timeout, "Request timed out")),
            }),
        );
        assert!(!app.tui.thread.pending);
        let last = app.tui.transcript.cells().last().unwrap();
        assert!(matches!(last, HistoryCell::Error { content } if content.contains("timed out")));
        assert!(app.tui.panel.store.is_empty());
    }

    #[test]
    fn test_clear_command_empties_panel_keeps_history() {
        let mut app = new_app();
        app.tui.panel.show("ProductGrid", &serde_json::json!({}));
        type_line(&mut app, "/clear");
        assert!(app.tui.panel.store.is_empty());
        assert_eq!(app.tui.panel.store.history().len(), 1);
    }

    #[test]
    fn test_tab_switches_focus_and_panel_keys_act() {
        let mut app = new_app();
        app.tui.panel.show(
            "ProductGrid",
            &serde_json::json!({ "products": [{ "id": "p1", "name": "Cap", "price": 9.5 }] }),
        );
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.tui.focus, Focus::Panel);

        let effects = press(&mut app, KeyCode::Char('a'));
        assert_eq!(
            effects,
            vec![UiEffect::AddToCart {
                product_id: "p1".to_string(),
                product_name: "Cap".to_string(),
                price: 9.5,
                image: "https://picsum.photos/seed/default/300/300".to_string(),
                quantity: 1,
            }]
        );
    }

    #[test]
    fn test_tryon_action_is_content_gated() {
        let mut app = new_app();
        app.tui.panel.show(
            "ProductGrid",
            &serde_json::json!({ "products": [{ "id": "p1", "name": "Cap", "price": 9.5 }] }),
        );
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.tui.panel.store.history().len(), 2);
        assert_eq!(app.tui.panel.store.current().unwrap().name, "TryOnStudio");

        // Same product again: no new history entry.
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.tui.panel.store.history().len(), 2);
    }

    #[test]
    fn test_cart_view_shows_checkout_wizard() {
        let mut app = new_app();
        update(
            &mut app,
            UiEvent::Backend(BackendEvent::CartUpdated {
                action: CartAction::Viewed,
                result: Ok(serde_json::from_value(serde_json::json!({
                    "cart": [{ "id": "1", "name": "Cap", "price": 10.0, "quantity": 2, "image": "" }],
                    "total_items": 2,
                    "total_price": 20.0
                }))
                .unwrap()),
            }),
        );
        let current = app.tui.panel.store.current().unwrap();
        assert_eq!(current.name, "CheckoutWizard");
        let PanelContent::Component(ComponentProps::CheckoutWizard(props)) = &current.content
        else {
            panic!("expected checkout wizard");
        };
        assert_eq!(props.cart_items.len(), 1);
        assert_eq!(props.cart_items[0].quantity, 2);
    }

    #[test]
    fn test_tryon_result_attaches_once() {
        let mut app = new_app();
        app.tui.panel.show(
            "TryOnStudio",
            &serde_json::json!({ "product": { "id": "p1", "name": "Cap" } }),
        );
        let event = |path: &str| {
            UiEvent::Backend(BackendEvent::TryOnCompleted {
                product_id: "p1".to_string(),
                result: Ok(std::path::PathBuf::from(path)),
            })
        };
        update(&mut app, event("/tmp/tryon.png"));
        assert_eq!(app.tui.panel.store.history().len(), 2);
        let PanelContent::Component(ComponentProps::TryOnStudio(props)) =
            &app.tui.panel.store.current().unwrap().content
        else {
            panic!("expected try-on studio");
        };
        assert_eq!(props.tryon_result_url.as_deref(), Some("/tmp/tryon.png"));

        // Same result delivered again: content-equality gate holds.
        update(&mut app, event("/tmp/tryon.png"));
        assert_eq!(app.tui.panel.store.history().len(), 2);
    }

    #[test]
    fn test_history_command_opens_overlay_and_restores() {
        let mut app = new_app();
        let first = app.tui.panel.show("ProductGrid", &serde_json::json!({})).id;
        app.tui.panel.show("CheckoutWizard", &serde_json::json!({}));

        type_line(&mut app, "/history");
        assert!(matches!(app.overlay, Some(Overlay::History(_))));

        // Newest-first list: move down to the older entry and restore it.
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert!(app.overlay.is_none());
        assert_eq!(app.tui.panel.store.current().unwrap().id, first);
        assert_eq!(app.tui.panel.store.history().len(), 2);
    }

    #[test]
    fn test_quit_paths() {
        let mut app = new_app();
        assert_eq!(type_line(&mut app, "/quit"), vec![UiEffect::Quit]);

        let mut app2 = new_app();
        let effects = update(
            &mut app2,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert_eq!(effects, vec![UiEffect::Quit]);
    }
}
