//! Browsing and discovery components: product grid, comparison table,
//! budget slider, deal panel, price trend chart.

use serde_json::Value;

use super::schema::{
    image_url_or, int_or, num_or, object, objects, opt_bool, opt_num, opt_str, str_or,
};

const PRODUCT_PLACEHOLDER: &str = "https://picsum.photos/seed/default/300/300";
const COMPARISON_PLACEHOLDER: &str = "https://picsum.photos/seed/default/200/200";
const DEAL_PLACEHOLDER: &str = "https://picsum.photos/seed/deal/300/300";

// ============================================================================
// ProductGrid
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub rating: Option<f64>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductGridProps {
    pub products: Vec<Product>,
    pub title: Option<String>,
    pub columns: u32,
}

pub fn product_grid(raw: &Value) -> ProductGridProps {
    ProductGridProps {
        products: objects(raw, "products").map(product).collect(),
        title: opt_str(raw, "title"),
        columns: int_or(raw, "columns", 3),
    }
}

fn product(raw: &Value) -> Product {
    Product {
        id: str_or(raw, "id", ""),
        name: str_or(raw, "name", "Unnamed Product"),
        price: num_or(raw, "price", 0.0),
        image: image_url_or(raw, "image", PRODUCT_PLACEHOLDER),
        rating: opt_num(raw, "rating"),
        category: opt_str(raw, "category"),
        in_stock: opt_bool(raw, "inStock"),
    }
}

// ============================================================================
// ComparisonTable
// ============================================================================

/// A single compared attribute. The agent sends feature values as strings,
/// numbers, or yes/no flags; anything else is dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Text(String),
    Number(f64),
    Flag(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub key: String,
    pub value: FeatureValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonProduct {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTableProps {
    pub products: Vec<ComparisonProduct>,
    pub title: Option<String>,
}

pub fn comparison_table(raw: &Value) -> ComparisonTableProps {
    ComparisonTableProps {
        products: objects(raw, "products")
            .map(|p| ComparisonProduct {
                id: str_or(p, "id", ""),
                name: str_or(p, "name", "Product"),
                price: num_or(p, "price", 0.0),
                image: image_url_or(p, "image", COMPARISON_PLACEHOLDER),
                features: objects(p, "features").filter_map(feature).collect(),
            })
            .collect(),
        title: opt_str(raw, "title"),
    }
}

fn feature(raw: &Value) -> Option<Feature> {
    let key = opt_str(raw, "key")?;
    let value = match raw.get("value")? {
        Value::String(s) => FeatureValue::Text(s.clone()),
        Value::Number(n) => FeatureValue::Number(n.as_f64()?),
        Value::Bool(b) => FeatureValue::Flag(*b),
        _ => return None,
    };
    Some(Feature { key, value })
}

// ============================================================================
// BudgetSlider
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetPreset {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSliderProps {
    pub min_price: f64,
    pub max_price: f64,
    pub current_min: f64,
    pub current_max: f64,
    pub matching_products: Option<u32>,
    pub presets: Vec<BudgetPreset>,
}

pub fn budget_slider(raw: &Value) -> BudgetSliderProps {
    let min_price = num_or(raw, "minPrice", 0.0);
    let max_price = num_or(raw, "maxPrice", 0.0);
    BudgetSliderProps {
        min_price,
        max_price,
        // Range handles default to the full span.
        current_min: opt_num(raw, "currentMin").unwrap_or(min_price),
        current_max: opt_num(raw, "currentMax").unwrap_or(max_price),
        matching_products: opt_num(raw, "matchingProducts").map(|n| n.max(0.0) as u32),
        presets: objects(raw, "presets")
            .filter_map(|p| {
                Some(BudgetPreset {
                    label: opt_str(p, "label")?,
                    min: num_or(p, "min", 0.0),
                    max: num_or(p, "max", 0.0),
                })
            })
            .collect(),
    }
}

// ============================================================================
// DealBadgePanel
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealBadge {
    Hot,
    New,
    Limited,
    Flash,
}

impl DealBadge {
    fn parse(label: &str) -> Option<Self> {
        match label {
            "HOT" => Some(DealBadge::Hot),
            "NEW" => Some(DealBadge::New),
            "LIMITED" => Some(DealBadge::Limited),
            "FLASH" => Some(DealBadge::Flash),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DealBadge::Hot => "HOT",
            DealBadge::New => "NEW",
            DealBadge::Limited => "LIMITED",
            DealBadge::Flash => "FLASH",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Deal {
    pub id: String,
    pub name: String,
    pub original_price: f64,
    pub sale_price: f64,
    pub image: String,
    pub discount: f64,
    pub expires_in: Option<String>,
    pub badge: Option<DealBadge>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DealBadgePanelProps {
    pub deals: Vec<Deal>,
    pub title: Option<String>,
}

pub fn deal_badge_panel(raw: &Value) -> DealBadgePanelProps {
    DealBadgePanelProps {
        deals: objects(raw, "deals")
            .map(|d| Deal {
                id: str_or(d, "id", ""),
                name: str_or(d, "name", "Deal"),
                original_price: num_or(d, "originalPrice", 0.0),
                sale_price: num_or(d, "salePrice", 0.0),
                image: image_url_or(d, "image", DEAL_PLACEHOLDER),
                discount: num_or(d, "discount", 0.0),
                expires_in: opt_str(d, "expiresIn"),
                badge: opt_str(d, "badge").and_then(|label| DealBadge::parse(&label)),
            })
            .collect(),
        title: opt_str(raw, "title"),
    }
}

// ============================================================================
// PriceTrendChart
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct TrendProduct {
    pub id: String,
    pub name: String,
    pub current_price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub date: String,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Area,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceTrendChartProps {
    pub product: TrendProduct,
    pub price_history: Vec<PricePoint>,
    pub lowest_price: f64,
    pub highest_price: f64,
    pub average_price: f64,
    pub chart_type: Option<ChartKind>,
}

pub fn price_trend_chart(raw: &Value) -> PriceTrendChartProps {
    let product = object(raw, "product").map_or_else(
        || TrendProduct {
            id: String::new(),
            name: "Product".to_string(),
            current_price: 0.0,
        },
        |p| TrendProduct {
            id: str_or(p, "id", ""),
            name: str_or(p, "name", "Product"),
            current_price: num_or(p, "currentPrice", 0.0),
        },
    );
    PriceTrendChartProps {
        product,
        price_history: objects(raw, "priceHistory")
            .map(|point| PricePoint {
                date: str_or(point, "date", ""),
                price: num_or(point, "price", 0.0),
            })
            .collect(),
        lowest_price: num_or(raw, "lowestPrice", 0.0),
        highest_price: num_or(raw, "highestPrice", 0.0),
        average_price: num_or(raw, "averagePrice", 0.0),
        chart_type: match opt_str(raw, "chartType").as_deref() {
            Some("line") => Some(ChartKind::Line),
            Some("area") => Some(ChartKind::Area),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_product_grid_defaults_empty_input() {
        let props = product_grid(&json!({}));
        assert!(props.products.is_empty());
        assert_eq!(props.title, None);
        assert_eq!(props.columns, 3);
    }

    #[test]
    fn test_product_defaults_and_coercion() {
        let props = product_grid(&json!({
            "products": [
                { "name": "Sunglasses", "price": "19.99", "image": "https://" },
                { "id": 7, "price": null }
            ],
            "columns": 2
        }));
        assert_eq!(props.columns, 2);

        let first = &props.products[0];
        assert_eq!(first.name, "Sunglasses");
        assert_eq!(first.price, 19.99);
        assert_eq!(first.image, PRODUCT_PLACEHOLDER);

        let second = &props.products[1];
        assert_eq!(second.id, "");
        assert_eq!(second.name, "Unnamed Product");
        assert_eq!(second.price, 0.0);
    }

    #[test]
    fn test_comparison_features_drop_malformed() {
        let props = comparison_table(&json!({
            "products": [{
                "name": "Watch",
                "features": [
                    { "key": "waterproof", "value": true },
                    { "key": "weight", "value": 42 },
                    { "key": "color", "value": "black" },
                    { "value": "orphan" },
                    { "key": "bad", "value": [1, 2] }
                ]
            }]
        }));
        let features = &props.products[0].features;
        assert_eq!(features.len(), 3);
        assert_eq!(features[0].value, FeatureValue::Flag(true));
        assert_eq!(features[1].value, FeatureValue::Number(42.0));
        assert_eq!(features[2].value, FeatureValue::Text("black".to_string()));
    }

    #[test]
    fn test_budget_slider_range_defaults_to_span() {
        let props = budget_slider(&json!({ "minPrice": 10, "maxPrice": 200 }));
        assert_eq!(props.current_min, 10.0);
        assert_eq!(props.current_max, 200.0);
        assert!(props.presets.is_empty());
    }

    #[test]
    fn test_deal_badge_parsing() {
        let props = deal_badge_panel(&json!({
            "deals": [
                { "name": "Flash sale", "badge": "FLASH" },
                { "name": "Unknown badge", "badge": "MEGA" }
            ]
        }));
        assert_eq!(props.deals[0].badge, Some(DealBadge::Flash));
        assert_eq!(props.deals[1].badge, None);
    }

    #[test]
    fn test_price_trend_missing_product() {
        let props = price_trend_chart(&json!({ "chartType": "area" }));
        assert_eq!(props.product.name, "Product");
        assert_eq!(props.chart_type, Some(ChartKind::Area));
        assert!(props.price_history.is_empty());
    }
}
