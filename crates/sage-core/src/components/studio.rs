//! Styling components: try-on studio, outfit board, virtual try-on upload.

use serde_json::Value;

use super::schema::{image_url_or, num_or, object, objects, opt_str, str_or, strings};

const TRYON_PLACEHOLDER: &str = "https://picsum.photos/seed/tryon/300/300";
const OUTFIT_PLACEHOLDER: &str = "https://picsum.photos/seed/outfit/200/200";

// ============================================================================
// TryOnStudio
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct TryOnProduct {
    pub id: String,
    pub name: String,
    pub image: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TryOnStudioProps {
    pub product: TryOnProduct,
    pub tryon_result_url: Option<String>,
    pub tips: Vec<String>,
}

pub fn tryon_studio(raw: &Value) -> TryOnStudioProps {
    let product = object(raw, "product").map_or_else(
        || TryOnProduct {
            id: String::new(),
            name: "Product".to_string(),
            image: TRYON_PLACEHOLDER.to_string(),
            category: "Apparel".to_string(),
        },
        |p| TryOnProduct {
            id: str_or(p, "id", ""),
            name: str_or(p, "name", "Product"),
            image: image_url_or(p, "image", TRYON_PLACEHOLDER),
            category: str_or(p, "category", "Apparel"),
        },
    );
    TryOnStudioProps {
        product,
        tryon_result_url: opt_str(raw, "tryonResultUrl"),
        tips: strings(raw, "tips"),
    }
}

// ============================================================================
// OutfitBoard
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct OutfitItem {
    pub id: String,
    pub name: String,
    pub image: String,
    pub price: f64,
    /// Set on suggested-outfit items, absent inside a category.
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutfitCategory {
    pub name: String,
    pub items: Vec<OutfitItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutfitBoardProps {
    pub categories: Vec<OutfitCategory>,
    pub suggested_outfit: Vec<OutfitItem>,
}

pub fn outfit_board(raw: &Value) -> OutfitBoardProps {
    OutfitBoardProps {
        categories: objects(raw, "categories")
            .map(|category| OutfitCategory {
                name: str_or(category, "name", "Category"),
                items: objects(category, "items").map(outfit_item).collect(),
            })
            .collect(),
        suggested_outfit: objects(raw, "suggestedOutfit").map(outfit_item).collect(),
    }
}

fn outfit_item(raw: &Value) -> OutfitItem {
    OutfitItem {
        id: str_or(raw, "id", ""),
        name: str_or(raw, "name", "Item"),
        image: image_url_or(raw, "image", OUTFIT_PLACEHOLDER),
        price: num_or(raw, "price", 0.0),
        category: opt_str(raw, "category"),
    }
}

// ============================================================================
// VirtualTryOn
// ============================================================================

/// Upload form for the photo-based try-on flow. The image itself is picked
/// locally; only the product reference arrives from the agent.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualTryOnProps {
    pub product_id: String,
    pub product_name: String,
    pub product_image: String,
}

pub fn virtual_tryon(raw: &Value) -> VirtualTryOnProps {
    VirtualTryOnProps {
        product_id: str_or(raw, "productId", ""),
        product_name: str_or(raw, "productName", "Product"),
        product_image: str_or(raw, "productImage", ""),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_tryon_studio_defaults() {
        let props = tryon_studio(&json!({}));
        assert_eq!(props.product.category, "Apparel");
        assert_eq!(props.product.image, TRYON_PLACEHOLDER);
        assert!(props.tips.is_empty());
    }

    #[test]
    fn test_outfit_board_nested_defaulting() {
        let props = outfit_board(&json!({
            "categories": [
                { "name": "Tops", "items": [{ "name": "Tee", "price": "12" }] },
                { "items": null }
            ],
            "suggestedOutfit": [{ "name": "Tee", "category": "Tops" }]
        }));
        assert_eq!(props.categories.len(), 2);
        assert_eq!(props.categories[0].items[0].price, 12.0);
        assert_eq!(props.categories[1].name, "Category");
        assert!(props.categories[1].items.is_empty());
        assert_eq!(props.suggested_outfit[0].category.as_deref(), Some("Tops"));
    }

    #[test]
    fn test_virtual_tryon_defaults() {
        let props = virtual_tryon(&json!({ "productId": "42" }));
        assert_eq!(props.product_id, "42");
        assert_eq!(props.product_name, "Product");
        assert_eq!(props.product_image, "");
    }
}
