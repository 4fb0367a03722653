//! Per-component panel views.
//!
//! Terminal renditions of the registered components. These are deliberately
//! compact: lists, tables, and gauges that surface the validated props, with
//! image URLs shown as footnotes rather than pixels.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Cell, Gauge, List, ListItem, ListState, Paragraph, Row, Sparkline, Table, TableState, Wrap,
};
use sage_core::components::account::{
    LoginFormProps, OrderHistoryProps, SignupFormProps, UserProfileProps,
};
use sage_core::components::browse::{
    BudgetSliderProps, ComparisonTableProps, DealBadgePanelProps, FeatureValue,
    PriceTrendChartProps, ProductGridProps,
};
use sage_core::components::cart::{BundleBuilderProps, CheckoutWizardProps, SmartCartOptimizerProps};
use sage_core::components::studio::{OutfitBoardProps, TryOnStudioProps, VirtualTryOnProps};

fn money(value: f64) -> String {
    format!("${value:.2}")
}

fn selected_style() -> Style {
    Style::default()
        .bg(Color::Cyan)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD)
}

fn title_line(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn render_list(frame: &mut Frame, area: Rect, items: Vec<ListItem<'static>>, selected: usize) {
    let list = List::new(items).highlight_style(selected_style());
    let mut state = ListState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

// ============================================================================
// Browsing
// ============================================================================

pub fn product_grid(frame: &mut Frame, area: Rect, props: &ProductGridProps, selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let title = props.title.clone().unwrap_or_else(|| "Products".to_string());
    frame.render_widget(Paragraph::new(title_line(&title)), chunks[0]);

    let items: Vec<ListItem<'static>> = props
        .products
        .iter()
        .map(|p| {
            let mut spans = vec![
                Span::raw(format!("{:<28}", truncate(&p.name, 28))),
                Span::styled(format!("{:>9}", money(p.price)), Style::default().fg(Color::Green)),
            ];
            if let Some(rating) = p.rating {
                spans.push(Span::styled(
                    format!("  {rating:.1}★"),
                    Style::default().fg(Color::Yellow),
                ));
            }
            if p.in_stock == Some(false) {
                spans.push(Span::styled("  out of stock", Style::default().fg(Color::Red)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();
    render_list(frame, chunks[1], items, selected);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "a add to cart · t try on · j/k move",
            Style::default().fg(Color::DarkGray),
        ))),
        chunks[2],
    );
}

pub fn comparison_table(frame: &mut Frame, area: Rect, props: &ComparisonTableProps, selected: usize) {
    let header = Row::new(vec![Cell::from("Product"), Cell::from("Price"), Cell::from("Features")])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row<'static>> = props
        .products
        .iter()
        .map(|p| {
            let features = p
                .features
                .iter()
                .map(|f| {
                    let value = match &f.value {
                        FeatureValue::Text(text) => text.clone(),
                        FeatureValue::Number(n) => n.to_string(),
                        FeatureValue::Flag(true) => "✓".to_string(),
                        FeatureValue::Flag(false) => "✗".to_string(),
                    };
                    format!("{}: {value}", f.key)
                })
                .collect::<Vec<_>>()
                .join(", ");
            Row::new(vec![
                Cell::from(truncate(&p.name, 24)),
                Cell::from(money(p.price)),
                Cell::from(features),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [Constraint::Length(24), Constraint::Length(10), Constraint::Min(10)],
    )
    .header(header)
    .row_highlight_style(selected_style());

    let mut state = TableState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(table, area, &mut state);
}

pub fn budget_slider(frame: &mut Frame, area: Rect, props: &BudgetSliderProps) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(title_line(&format!(
            "Budget {} - {}",
            money(props.current_min),
            money(props.current_max)
        ))),
        chunks[0],
    );

    let span = (props.max_price - props.min_price).max(f64::EPSILON);
    let ratio = ((props.current_max - props.min_price) / span).clamp(0.0, 1.0);
    let label = props
        .matching_products
        .map_or_else(String::new, |n| format!("{n} matching products"));
    frame.render_widget(
        Gauge::default().ratio(ratio).label(label).gauge_style(Style::default().fg(Color::Cyan)),
        chunks[1],
    );

    let presets: Vec<Line<'static>> = props
        .presets
        .iter()
        .map(|p| Line::from(format!("{}: {} - {}", p.label, money(p.min), money(p.max))))
        .collect();
    frame.render_widget(Paragraph::new(presets), chunks[2]);
}

pub fn deal_badge_panel(frame: &mut Frame, area: Rect, props: &DealBadgePanelProps, selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);
    let title = props.title.clone().unwrap_or_else(|| "Deals".to_string());
    frame.render_widget(Paragraph::new(title_line(&title)), chunks[0]);

    let items: Vec<ListItem<'static>> = props
        .deals
        .iter()
        .map(|d| {
            let mut spans = Vec::new();
            if let Some(badge) = d.badge {
                spans.push(Span::styled(
                    format!("[{}] ", badge.label()),
                    Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
                ));
            }
            spans.push(Span::raw(format!("{:<24}", truncate(&d.name, 24))));
            spans.push(Span::styled(
                format!("{:>9}", money(d.sale_price)),
                Style::default().fg(Color::Green),
            ));
            spans.push(Span::styled(
                format!("  was {}", money(d.original_price)),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT),
            ));
            if d.discount > 0.0 {
                spans.push(Span::styled(
                    format!("  -{:.0}%", d.discount),
                    Style::default().fg(Color::Red),
                ));
            }
            if let Some(expires) = &d.expires_in {
                spans.push(Span::styled(
                    format!("  ends in {expires}"),
                    Style::default().fg(Color::Yellow),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();
    render_list(frame, chunks[1], items, selected);
}

pub fn price_trend_chart(frame: &mut Frame, area: Rect, props: &PriceTrendChartProps) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(title_line(&format!(
            "{} - now {}",
            props.product.name,
            money(props.product.current_price)
        ))),
        chunks[0],
    );

    // Sparkline wants u64s; scale prices to cents.
    let data: Vec<u64> = props
        .price_history
        .iter()
        .map(|point| (point.price.max(0.0) * 100.0) as u64)
        .collect();
    frame.render_widget(
        Sparkline::default().data(&data).style(Style::default().fg(Color::Cyan)),
        chunks[1],
    );

    let summary = Line::from(vec![
        Span::styled(format!("low {}", money(props.lowest_price)), Style::default().fg(Color::Green)),
        Span::raw("  "),
        Span::styled(format!("high {}", money(props.highest_price)), Style::default().fg(Color::Red)),
        Span::raw("  "),
        Span::raw(format!("avg {}", money(props.average_price))),
    ]);
    frame.render_widget(Paragraph::new(summary), chunks[2]);
}

// ============================================================================
// Cart
// ============================================================================

pub fn checkout_wizard(frame: &mut Frame, area: Rect, props: &CheckoutWizardProps, selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area);

    let mode = if props.express_mode == Some(true) {
        "Checkout (express)"
    } else {
        "Checkout"
    };
    frame.render_widget(Paragraph::new(title_line(mode)), chunks[0]);

    let items: Vec<ListItem<'static>> = props
        .cart_items
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<26}", truncate(&item.name, 26))),
                Span::raw(format!("x{:<3}", item.quantity)),
                Span::styled(
                    format!("{:>9}", money(item.price * f64::from(item.quantity))),
                    Style::default().fg(Color::Green),
                ),
            ]))
        })
        .collect();
    render_list(frame, chunks[1], items, selected);

    let subtotal = props.subtotal();
    let totals = vec![
        Line::from(format!("Subtotal {:>10}", money(subtotal))),
        Line::from(format!("Shipping {:>10}", money(props.shipping_cost))),
        Line::from(Span::styled(
            format!("Total    {:>10}", money(subtotal + props.shipping_cost)),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(totals), chunks[2]);
}

pub fn smart_cart_optimizer(
    frame: &mut Frame,
    area: Rect,
    props: &SmartCartOptimizerProps,
    selected: usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Percentage(50)])
        .split(area);

    let items: Vec<ListItem<'static>> = props
        .cart_items
        .iter()
        .map(|item| {
            ListItem::new(Line::from(format!(
                "{:<26} x{:<3}{:>9}",
                truncate(&item.name, 26),
                item.quantity,
                money(item.price)
            )))
        })
        .collect();
    render_list(frame, chunks[0], items, selected);

    let mut lines = vec![title_line("Suggestions")];
    for suggestion in &props.suggestions {
        let mut text = suggestion.message.clone();
        if let Some(savings) = suggestion.savings {
            text.push_str(&format!(" (save {})", money(savings)));
        }
        lines.push(Line::from(format!("• {text}")));
        if let Some(alt) = &suggestion.alternative {
            lines.push(Line::from(Span::styled(
                format!("  -> {} at {}", alt.name, money(alt.price)),
                Style::default().fg(Color::Green),
            )));
        }
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[1]);
}

pub fn bundle_builder(frame: &mut Frame, area: Rect, props: &BundleBuilderProps, selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(vec![
            title_line(&format!(
                "Bundle around {}",
                truncate(&props.main_product.name, 32)
            )),
            Line::from(format!("Base price {}", money(props.main_product.price))),
        ]),
        chunks[0],
    );

    let items: Vec<ListItem<'static>> = props
        .accessories
        .iter()
        .map(|item| {
            ListItem::new(Line::from(format!(
                "{:<24} {:<12}{:>9}",
                truncate(&item.name, 24),
                item.category,
                money(item.price)
            )))
        })
        .collect();
    render_list(frame, chunks[1], items, selected);

    let full: f64 =
        props.main_product.price + props.accessories.iter().map(|a| a.price).sum::<f64>();
    let discounted = full * (1.0 - props.discount_percent / 100.0);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(format!(
                "Bundle discount {:.0}% - pay {} instead of {}",
                props.discount_percent,
                money(discounted),
                money(full)
            )),
        ]),
        chunks[2],
    );
}

// ============================================================================
// Studio
// ============================================================================

pub fn tryon_studio(frame: &mut Frame, area: Rect, props: &TryOnStudioProps) {
    let mut lines = vec![
        title_line(&format!("Try on: {}", props.product.name)),
        Line::from(format!("Category: {}", props.product.category)),
        Line::from(Span::styled(
            format!("Image: {}", props.product.image),
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
    ];
    match &props.tryon_result_url {
        Some(url) => {
            lines.push(Line::from(Span::styled(
                "Result ready:",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(url.clone()));
        }
        None => {
            lines.push(Line::from(format!(
                "Upload a photo with /tryon {} <image-path>",
                if props.product.id.is_empty() { "<product-id>" } else { &props.product.id }
            )));
        }
    }
    if !props.tips.is_empty() {
        lines.push(Line::default());
        lines.push(title_line("Tips"));
        for tip in &props.tips {
            lines.push(Line::from(format!("• {tip}")));
        }
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

pub fn outfit_board(frame: &mut Frame, area: Rect, props: &OutfitBoardProps) {
    let mut lines = Vec::new();
    for category in &props.categories {
        lines.push(title_line(&category.name));
        for item in &category.items {
            lines.push(Line::from(format!(
                "  {:<26}{:>9}",
                truncate(&item.name, 26),
                money(item.price)
            )));
        }
    }
    if !props.suggested_outfit.is_empty() {
        lines.push(Line::default());
        lines.push(title_line("Suggested outfit"));
        let total: f64 = props.suggested_outfit.iter().map(|item| item.price).sum();
        for item in &props.suggested_outfit {
            let category = item.category.clone().unwrap_or_default();
            lines.push(Line::from(format!(
                "  {:<12}{:<22}{:>9}",
                category,
                truncate(&item.name, 22),
                money(item.price)
            )));
        }
        lines.push(Line::from(Span::styled(
            format!("  Complete look: {}", money(total)),
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

pub fn virtual_tryon(frame: &mut Frame, area: Rect, props: &VirtualTryOnProps) {
    let product_id = if props.product_id.is_empty() {
        "<product-id>".to_string()
    } else {
        props.product_id.clone()
    };
    let lines = vec![
        title_line(&format!("Virtual try-on: {}", props.product_name)),
        Line::default(),
        Line::from("Pick a photo of yourself and run:"),
        Line::from(Span::styled(
            format!("  /tryon {product_id} ~/path/to/photo.jpg"),
            Style::default().fg(Color::Cyan),
        )),
        Line::default(),
        Line::from("The rendered image is saved next to your exports."),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

// ============================================================================
// Account
// ============================================================================

pub fn login_form(frame: &mut Frame, area: Rect, props: &LoginFormProps) {
    let mut lines = Vec::new();
    if let Some(message) = &props.message {
        lines.push(Line::from(message.clone()));
        lines.push(Line::default());
    }
    lines.push(Line::from("Sign in with:"));
    lines.push(Line::from(Span::styled(
        "  /login <email> <password>",
        Style::default().fg(Color::Cyan),
    )));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

pub fn signup_form(frame: &mut Frame, area: Rect, props: &SignupFormProps) {
    let mut lines = Vec::new();
    if let Some(message) = &props.message {
        lines.push(Line::from(message.clone()));
        lines.push(Line::default());
    }
    lines.push(Line::from("Create an account with:"));
    lines.push(Line::from(Span::styled(
        "  /signup <email> <username> <password>",
        Style::default().fg(Color::Cyan),
    )));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

pub fn order_history(frame: &mut Frame, area: Rect, props: &OrderHistoryProps, selected: usize) {
    if props.orders.is_empty() {
        frame.render_widget(Paragraph::new("No orders yet."), area);
        return;
    }
    let items: Vec<ListItem<'static>> = props
        .orders
        .iter()
        .map(|order| {
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    format!("{:<14}", order.order_id),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("{:<12}", order.date)),
                Span::styled(format!("{:<12}", order.status), Style::default().fg(Color::Yellow)),
                Span::styled(format!("{:>9}", money(order.total)), Style::default().fg(Color::Green)),
            ])];
            for item in &order.items {
                lines.push(Line::from(Span::styled(
                    format!("    {} x{}", truncate(&item.name, 30), item.quantity),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            ListItem::new(lines)
        })
        .collect();
    render_list(frame, area, items, selected);
}

pub fn user_profile(frame: &mut Frame, area: Rect, props: &UserProfileProps) {
    let mut lines = Vec::new();
    match &props.user {
        Some(user) => {
            let display_name = user.full_name.clone().unwrap_or_else(|| user.username.clone());
            lines.push(title_line(&display_name));
            lines.push(Line::from(user.email.clone()));
            if let Some(address) = &user.address {
                lines.push(Line::from(address.clone()));
            }
            if let Some(created) = &user.created_at {
                lines.push(Line::from(Span::styled(
                    format!("Member since {created}"),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
        None => {
            lines.push(title_line("Guest"));
            lines.push(Line::from("Log in to see your profile."));
        }
    }
    lines.push(Line::default());
    lines.push(Line::from(format!(
        "Cart: {} items   Orders: {}",
        props.total_cart_items, props.total_orders
    )));
    if !props.cart_items.is_empty() {
        lines.push(Line::default());
        lines.push(title_line("In your cart"));
        for item in &props.cart_items {
            lines.push(Line::from(format!(
                "  {:<26} x{:<3}{:>9}",
                truncate(&item.name, 26),
                item.quantity,
                money(item.price)
            )));
        }
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long product name", 10), "a very lo…");
    }

    #[test]
    fn test_money_format() {
        assert_eq!(money(19.9), "$19.90");
        assert_eq!(money(0.0), "$0.00");
    }
}
