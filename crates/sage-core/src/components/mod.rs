//! Component registry and prop validation.
//!
//! Each renderable component declares a validator: a pure function from raw,
//! untrusted agent props to a fully defaulted typed shape. The registry maps
//! canonical component names to their validator and a human-readable
//! description (the description is also what a backend model is told about
//! the component when choosing what to render).

pub mod account;
pub mod browse;
pub mod cart;
pub mod schema;
pub mod studio;

use serde_json::Value;

pub use account::{LoginFormProps, OrderHistoryProps, SignupFormProps, UserProfileProps};
pub use browse::{
    BudgetSliderProps, ComparisonTableProps, DealBadgePanelProps, PriceTrendChartProps,
    ProductGridProps,
};
pub use cart::{BundleBuilderProps, CheckoutWizardProps, SmartCartOptimizerProps};
pub use studio::{OutfitBoardProps, TryOnStudioProps, VirtualTryOnProps};

/// Validated, typed props for one registered component.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentProps {
    ProductGrid(ProductGridProps),
    ComparisonTable(ComparisonTableProps),
    BudgetSlider(BudgetSliderProps),
    DealBadgePanel(DealBadgePanelProps),
    TryOnStudio(TryOnStudioProps),
    OutfitBoard(OutfitBoardProps),
    BundleBuilder(BundleBuilderProps),
    CheckoutWizard(CheckoutWizardProps),
    SmartCartOptimizer(SmartCartOptimizerProps),
    PriceTrendChart(PriceTrendChartProps),
    LoginForm(LoginFormProps),
    SignupForm(SignupFormProps),
    OrderHistory(OrderHistoryProps),
    UserProfile(UserProfileProps),
    VirtualTryOn(VirtualTryOnProps),
}

impl ComponentProps {
    /// The registry name of this component.
    pub fn component_name(&self) -> &'static str {
        match self {
            ComponentProps::ProductGrid(_) => "ProductGrid",
            ComponentProps::ComparisonTable(_) => "ComparisonTable",
            ComponentProps::BudgetSlider(_) => "BudgetSlider",
            ComponentProps::DealBadgePanel(_) => "DealBadgePanel",
            ComponentProps::TryOnStudio(_) => "TryOnStudio",
            ComponentProps::OutfitBoard(_) => "OutfitBoard",
            ComponentProps::BundleBuilder(_) => "BundleBuilder",
            ComponentProps::CheckoutWizard(_) => "CheckoutWizard",
            ComponentProps::SmartCartOptimizer(_) => "SmartCartOptimizer",
            ComponentProps::PriceTrendChart(_) => "PriceTrendChart",
            ComponentProps::LoginForm(_) => "LoginForm",
            ComponentProps::SignupForm(_) => "SignupForm",
            ComponentProps::OrderHistory(_) => "OrderHistory",
            ComponentProps::UserProfile(_) => "UserProfile",
            ComponentProps::VirtualTryOn(_) => "VirtualTryOn",
        }
    }
}

/// Outcome of validating a directive against the registry.
///
/// An unregistered name is not an error: the raw props are kept so the
/// render surface can show a useful "component not registered" state.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelContent {
    Component(ComponentProps),
    Unregistered(Value),
}

/// One registry entry: canonical name, model-facing description, validator.
pub struct ComponentSpec {
    pub name: &'static str,
    pub description: &'static str,
    validate: fn(&Value) -> ComponentProps,
}

impl ComponentSpec {
    /// Validates raw props into the component's typed shape. Never fails.
    pub fn validate(&self, raw: &Value) -> ComponentProps {
        (self.validate)(raw)
    }
}

static REGISTRY: &[ComponentSpec] = &[
    ComponentSpec {
        name: "ProductGrid",
        description: "Products in a grid with images, prices, ratings and an add-to-cart \
                      action. Used for browsing, search results, and category pages.",
        validate: |raw| ComponentProps::ProductGrid(browse::product_grid(raw)),
    },
    ComponentSpec {
        name: "ComparisonTable",
        description: "Side-by-side product comparison with per-feature rows. Used when the \
                      user wants to compare products or asks which is better.",
        validate: |raw| ComponentProps::ComparisonTable(browse::comparison_table(raw)),
    },
    ComponentSpec {
        name: "BudgetSlider",
        description: "Price-range selector with quick presets and a matching-product count. \
                      Used when the user mentions a budget or price constraints.",
        validate: |raw| ComponentProps::BudgetSlider(browse::budget_slider(raw)),
    },
    ComponentSpec {
        name: "DealBadgePanel",
        description: "Deals and limited-time offers with savings badges and expiry. Used for \
                      sales, discounts, and best-offer requests.",
        validate: |raw| ComponentProps::DealBadgePanel(browse::deal_badge_panel(raw)),
    },
    ComponentSpec {
        name: "TryOnStudio",
        description: "Try-on studio for apparel and accessories, with styling tips and an \
                      optional generated result image.",
        validate: |raw| ComponentProps::TryOnStudio(studio::tryon_studio(raw)),
    },
    ComponentSpec {
        name: "OutfitBoard",
        description: "Outfit builder mixing items across categories into a complete look. \
                      Used for outfit creation and matching items.",
        validate: |raw| ComponentProps::OutfitBoard(studio::outfit_board(raw)),
    },
    ComponentSpec {
        name: "BundleBuilder",
        description: "Product bundle with accessories and an automatic bundle discount. Used \
                      when the user wants sets or related products together.",
        validate: |raw| ComponentProps::BundleBuilder(cart::bundle_builder(raw)),
    },
    ComponentSpec {
        name: "CheckoutWizard",
        description: "Checkout summary with line items, shipping cost, and totals. Used when \
                      the user is ready to complete a purchase.",
        validate: |raw| ComponentProps::CheckoutWizard(cart::checkout_wizard(raw)),
    },
    ComponentSpec {
        name: "SmartCartOptimizer",
        description: "Cart review with cheaper alternatives and savings suggestions. Used \
                      when the user wants to optimize the cart or save money.",
        validate: |raw| ComponentProps::SmartCartOptimizer(cart::smart_cart_optimizer(raw)),
    },
    ComponentSpec {
        name: "PriceTrendChart",
        description: "Price history with lowest/highest/average markers. Used when the user \
                      asks about price trends or whether a deal is good.",
        validate: |raw| ComponentProps::PriceTrendChart(browse::price_trend_chart(raw)),
    },
    ComponentSpec {
        name: "LoginForm",
        description: "Credential form for signing in. Used when an action needs an \
                      authenticated account.",
        validate: |raw| ComponentProps::LoginForm(account::login_form(raw)),
    },
    ComponentSpec {
        name: "SignupForm",
        description: "Registration form for creating an account.",
        validate: |raw| ComponentProps::SignupForm(account::signup_form(raw)),
    },
    ComponentSpec {
        name: "OrderHistory",
        description: "Past orders with items, totals, status, and shipping details.",
        validate: |raw| ComponentProps::OrderHistory(account::order_history(raw)),
    },
    ComponentSpec {
        name: "UserProfile",
        description: "Account overview: profile data, cart contents, and order counts.",
        validate: |raw| ComponentProps::UserProfile(account::user_profile(raw)),
    },
    ComponentSpec {
        name: "VirtualTryOn",
        description: "Photo upload flow that renders the selected product onto the user's \
                      picture.",
        validate: |raw| ComponentProps::VirtualTryOn(studio::virtual_tryon(raw)),
    },
];

/// All registered components, in registration order.
pub fn all() -> &'static [ComponentSpec] {
    REGISTRY
}

/// Exact-match lookup of a component by name.
pub fn resolve(name: &str) -> Option<&'static ComponentSpec> {
    REGISTRY.iter().find(|spec| spec.name == name)
}

/// Validates raw props for `name`, keeping them raw when the name is not
/// registered.
pub fn validate(name: &str, raw: &Value) -> PanelContent {
    match resolve(name) {
        Some(spec) => PanelContent::Component(spec.validate(raw)),
        None => PanelContent::Unregistered(raw.clone()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_resolve_is_exact_match() {
        assert!(resolve("ProductGrid").is_some());
        assert!(resolve("productgrid").is_none());
        assert!(resolve("ProductGrid ").is_none());
    }

    #[test]
    fn test_registry_names_are_unique() {
        for (i, spec) in all().iter().enumerate() {
            assert!(
                all().iter().skip(i + 1).all(|other| other.name != spec.name),
                "duplicate registry entry: {}",
                spec.name
            );
        }
    }

    #[test]
    fn test_validate_unregistered_keeps_raw_props() {
        let raw = json!({ "anything": [1, 2, 3] });
        match validate("NotRegistered", &raw) {
            PanelContent::Unregistered(kept) => assert_eq!(kept, raw),
            PanelContent::Component(_) => panic!("unregistered name must not validate"),
        }
    }

    #[test]
    fn test_validate_dispatches_to_component() {
        let content = validate("ProductGrid", &json!({ "title": "Shoes" }));
        match content {
            PanelContent::Component(ComponentProps::ProductGrid(props)) => {
                assert_eq!(props.title.as_deref(), Some("Shoes"));
            }
            other => panic!("unexpected content: {other:?}"),
        }
    }

    /// Every validator must accept a completely empty object without
    /// producing anything but defaults.
    #[test]
    fn test_every_validator_accepts_empty_props() {
        let empty = json!({});
        for spec in all() {
            let props = spec.validate(&empty);
            assert_eq!(props.component_name(), spec.name);
        }
    }

    /// Validators must also swallow aggressively malformed input.
    #[test]
    fn test_every_validator_accepts_garbage_props() {
        let garbage = json!({
            "products": "nope", "cartItems": 17, "deals": { "x": 1 },
            "orders": [null], "title": [], "columns": "many",
            "mainProduct": "wrong", "product": 3, "user": false
        });
        for spec in all() {
            let _ = spec.validate(&garbage);
        }
    }
}
