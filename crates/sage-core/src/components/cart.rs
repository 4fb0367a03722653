//! Cart and purchase components: checkout wizard, cart optimizer,
//! bundle builder.

use serde_json::Value;

use super::schema::{image_url_or, int_or, num_or, object, objects, opt_bool, opt_num, opt_str, str_or};

const CART_PLACEHOLDER: &str = "https://picsum.photos/seed/cart/100/100";
const ALT_PLACEHOLDER: &str = "https://picsum.photos/seed/alt/100/100";
const MAIN_PLACEHOLDER: &str = "https://picsum.photos/seed/main/300/300";
const BUNDLE_PLACEHOLDER: &str = "https://picsum.photos/seed/bundle/200/200";

/// A line item in the cart, shared by the checkout and optimizer views.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub image: String,
}

pub(super) fn cart_item(raw: &Value) -> CartItem {
    CartItem {
        id: str_or(raw, "id", ""),
        name: str_or(raw, "name", "Item"),
        price: num_or(raw, "price", 0.0),
        quantity: int_or(raw, "quantity", 1),
        image: image_url_or(raw, "image", CART_PLACEHOLDER),
    }
}

// ============================================================================
// CheckoutWizard
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutWizardProps {
    pub cart_items: Vec<CartItem>,
    pub express_mode: Option<bool>,
    pub shipping_cost: f64,
}

impl CheckoutWizardProps {
    /// Sum of line totals before shipping.
    pub fn subtotal(&self) -> f64 {
        self.cart_items
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum()
    }
}

pub fn checkout_wizard(raw: &Value) -> CheckoutWizardProps {
    CheckoutWizardProps {
        cart_items: objects(raw, "cartItems").map(cart_item).collect(),
        express_mode: opt_bool(raw, "expressMode"),
        shipping_cost: num_or(raw, "shippingCost", 0.0),
    }
}

// ============================================================================
// SmartCartOptimizer
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Alternative {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub kind: Option<String>,
    pub message: String,
    pub savings: Option<f64>,
    pub product_id: Option<String>,
    pub alternative: Option<Alternative>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SmartCartOptimizerProps {
    pub cart_items: Vec<CartItem>,
    pub suggestions: Vec<Suggestion>,
}

pub fn smart_cart_optimizer(raw: &Value) -> SmartCartOptimizerProps {
    SmartCartOptimizerProps {
        cart_items: objects(raw, "cartItems").map(cart_item).collect(),
        suggestions: objects(raw, "suggestions")
            .map(|s| Suggestion {
                kind: opt_str(s, "type"),
                message: str_or(s, "message", ""),
                savings: opt_num(s, "savings"),
                product_id: opt_str(s, "productId"),
                alternative: object(s, "alternative").map(|alt| Alternative {
                    id: str_or(alt, "id", ""),
                    name: str_or(alt, "name", "Item"),
                    price: num_or(alt, "price", 0.0),
                    image: image_url_or(alt, "image", ALT_PLACEHOLDER),
                }),
            })
            .collect(),
    }
}

// ============================================================================
// BundleBuilder
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct BundleMain {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BundleItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BundleBuilderProps {
    pub main_product: BundleMain,
    pub accessories: Vec<BundleItem>,
    pub discount_percent: f64,
}

pub fn bundle_builder(raw: &Value) -> BundleBuilderProps {
    let main_product = object(raw, "mainProduct").map_or_else(
        || BundleMain {
            id: String::new(),
            name: "Main Product".to_string(),
            price: 0.0,
            image: MAIN_PLACEHOLDER.to_string(),
        },
        |main| BundleMain {
            id: str_or(main, "id", ""),
            name: str_or(main, "name", "Main Product"),
            price: num_or(main, "price", 0.0),
            image: image_url_or(main, "image", MAIN_PLACEHOLDER),
        },
    );
    BundleBuilderProps {
        main_product,
        accessories: objects(raw, "accessories")
            .map(|item| BundleItem {
                id: str_or(item, "id", ""),
                name: str_or(item, "name", "Item"),
                price: num_or(item, "price", 0.0),
                image: image_url_or(item, "image", BUNDLE_PLACEHOLDER),
                category: str_or(item, "category", "Accessory"),
            })
            .collect(),
        discount_percent: num_or(raw, "discountPercent", 15.0),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_checkout_defaults() {
        let props = checkout_wizard(&json!({}));
        assert!(props.cart_items.is_empty());
        assert_eq!(props.express_mode, None);
        assert_eq!(props.shipping_cost, 0.0);
    }

    #[test]
    fn test_checkout_subtotal() {
        let props = checkout_wizard(&json!({
            "cartItems": [
                { "name": "Shirt", "price": 20.0, "quantity": 2 },
                { "name": "Cap", "price": 10.0 }
            ],
            "shippingCost": 5
        }));
        assert_eq!(props.subtotal(), 50.0);
        assert_eq!(props.cart_items[1].quantity, 1);
    }

    #[test]
    fn test_optimizer_alternative_is_optional() {
        let props = smart_cart_optimizer(&json!({
            "suggestions": [
                { "type": "swap", "message": "Cheaper option available", "savings": 4.5,
                  "alternative": { "name": "Budget Cap", "price": 5.5 } },
                { "message": "Bundle and save" }
            ]
        }));
        assert_eq!(props.suggestions.len(), 2);
        let alt = props.suggestions[0].alternative.as_ref().unwrap();
        assert_eq!(alt.name, "Budget Cap");
        assert!(props.suggestions[1].alternative.is_none());
    }

    #[test]
    fn test_bundle_missing_main_product() {
        let props = bundle_builder(&json!({ "accessories": [{ "name": "Case" }] }));
        assert_eq!(props.main_product.name, "Main Product");
        assert_eq!(props.main_product.image, MAIN_PLACEHOLDER);
        assert_eq!(props.accessories[0].category, "Accessory");
        assert_eq!(props.discount_percent, 15.0);
    }
}
