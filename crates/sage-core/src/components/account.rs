//! Account components: login/signup forms, order history, user profile.

use serde_json::Value;

use super::cart::{CartItem, cart_item};
use super::schema::{int_or, num_or, object, objects, opt_str, sanitize_image_url, str_or};

const ORDER_PLACEHOLDER: &str = "https://picsum.photos/seed/order/100/100";

// ============================================================================
// LoginForm / SignupForm
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct LoginFormProps {
    pub message: Option<String>,
}

pub fn login_form(raw: &Value) -> LoginFormProps {
    LoginFormProps {
        message: opt_str(raw, "message"),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignupFormProps {
    pub message: Option<String>,
}

pub fn signup_form(raw: &Value) -> SignupFormProps {
    SignupFormProps {
        message: opt_str(raw, "message"),
    }
}

// ============================================================================
// OrderHistory
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShippingInfo {
    pub full_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_id: String,
    pub date: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: String,
    pub shipping_info: Option<ShippingInfo>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderHistoryProps {
    pub orders: Vec<Order>,
}

pub fn order_history(raw: &Value) -> OrderHistoryProps {
    OrderHistoryProps {
        orders: objects(raw, "orders").map(order).collect(),
    }
}

fn order(raw: &Value) -> Order {
    Order {
        order_id: str_or(raw, "orderId", ""),
        date: str_or(raw, "date", ""),
        items: objects(raw, "items")
            .map(|item| OrderItem {
                id: str_or(item, "id", ""),
                name: str_or(item, "name", "Item"),
                price: num_or(item, "price", 0.0),
                quantity: int_or(item, "quantity", 1),
                image: opt_str(item, "image").map(|url| sanitize_image_url(&url, ORDER_PLACEHOLDER)),
            })
            .collect(),
        total: num_or(raw, "total", 0.0),
        status: str_or(raw, "status", "processing"),
        shipping_info: object(raw, "shipping_info").map(|info| ShippingInfo {
            full_name: opt_str(info, "fullName"),
            address: opt_str(info, "address"),
            city: opt_str(info, "city"),
            state: opt_str(info, "state"),
            zip: opt_str(info, "zip"),
            phone: opt_str(info, "phone"),
        }),
    }
}

// ============================================================================
// UserProfile
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct UserData {
    pub id: String,
    pub email: String,
    pub username: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfileProps {
    pub user: Option<UserData>,
    pub cart_items: Vec<CartItem>,
    pub orders: Vec<Order>,
    pub total_cart_items: u32,
    pub total_orders: u32,
}

pub fn user_profile(raw: &Value) -> UserProfileProps {
    UserProfileProps {
        user: object(raw, "user").map(|user| UserData {
            id: str_or(user, "id", ""),
            email: str_or(user, "email", ""),
            username: str_or(user, "username", ""),
            full_name: opt_str(user, "full_name"),
            phone: opt_str(user, "phone"),
            address: opt_str(user, "address"),
            created_at: opt_str(user, "created_at"),
        }),
        cart_items: objects(raw, "cart_items").map(cart_item).collect(),
        orders: objects(raw, "orders").map(order).collect(),
        total_cart_items: int_or(raw, "total_cart_items", 0),
        total_orders: int_or(raw, "total_orders", 0),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_order_history_null_entries_skipped() {
        // The backend pads order arrays with nulls when records are missing.
        let props = order_history(&json!({
            "orders": [
                { "orderId": "ORD-1", "date": "2025-11-02", "total": 31.5,
                  "status": "shipped", "items": [null, { "name": "Cap", "price": 10 }] },
                null
            ]
        }));
        assert_eq!(props.orders.len(), 1);
        let order = &props.orders[0];
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.status, "shipped");
    }

    #[test]
    fn test_user_profile_anonymous() {
        let props = user_profile(&json!({ "total_cart_items": 2 }));
        assert!(props.user.is_none());
        assert_eq!(props.total_cart_items, 2);
        assert_eq!(props.total_orders, 0);
    }

    #[test]
    fn test_login_form_message_optional() {
        assert_eq!(login_form(&json!({})).message, None);
        assert_eq!(
            signup_form(&json!({ "message": "Create an account to checkout" })).message,
            Some("Create an account to checkout".to_string())
        );
    }
}
