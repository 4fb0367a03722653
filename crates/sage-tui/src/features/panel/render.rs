//! Render surface: projects panel state onto the right-hand region.
//!
//! Pure with respect to state - these functions read the store and draw,
//! they never call back into it.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use sage_core::components::{ComponentProps, PanelContent};

use super::state::PanelState;
use super::views;

/// Renders the panel region: idle, component, or not-found state.
pub fn render_panel(frame: &mut Frame, area: Rect, panel: &PanelState, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(instance) = panel.store.current() else {
        render_idle(frame, inner);
        return;
    };

    // Header: component name + dismiss hint.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);
    let header = Line::from(vec![
        Span::styled(
            instance.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", instance.timestamp.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("  c clear · h history", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    match &instance.content {
        PanelContent::Component(props) => render_component(frame, chunks[1], props, panel.selected),
        PanelContent::Unregistered(_) => render_not_found(frame, chunks[1], &instance.name),
    }
}

fn render_component(frame: &mut Frame, area: Rect, props: &ComponentProps, selected: usize) {
    match props {
        ComponentProps::ProductGrid(p) => views::product_grid(frame, area, p, selected),
        ComponentProps::ComparisonTable(p) => views::comparison_table(frame, area, p, selected),
        ComponentProps::BudgetSlider(p) => views::budget_slider(frame, area, p),
        ComponentProps::DealBadgePanel(p) => views::deal_badge_panel(frame, area, p, selected),
        ComponentProps::TryOnStudio(p) => views::tryon_studio(frame, area, p),
        ComponentProps::OutfitBoard(p) => views::outfit_board(frame, area, p),
        ComponentProps::BundleBuilder(p) => views::bundle_builder(frame, area, p, selected),
        ComponentProps::CheckoutWizard(p) => views::checkout_wizard(frame, area, p, selected),
        ComponentProps::SmartCartOptimizer(p) => views::smart_cart_optimizer(frame, area, p, selected),
        ComponentProps::PriceTrendChart(p) => views::price_trend_chart(frame, area, p),
        ComponentProps::LoginForm(p) => views::login_form(frame, area, p),
        ComponentProps::SignupForm(p) => views::signup_form(frame, area, p),
        ComponentProps::OrderHistory(p) => views::order_history(frame, area, p, selected),
        ComponentProps::UserProfile(p) => views::user_profile(frame, area, p),
        ComponentProps::VirtualTryOn(p) => views::virtual_tryon(frame, area, p),
    }
}

fn render_idle(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::default(),
        Line::from(Span::styled(
            "Preview panel",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from("Components appear here as you talk to the"),
        Line::from("shopping assistant. Try asking about products,"),
        Line::from("deals, or your cart."),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .alignment(ratatui::layout::Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_not_found(frame: &mut Frame, area: Rect, name: &str) {
    let text = vec![
        Line::default(),
        Line::from(Span::styled(
            "Component not registered",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(format!("The agent asked for \"{name}\", which this")),
        Line::from("client does not know how to render."),
        Line::default(),
        Line::from(Span::styled(
            "Press c to clear the panel",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .alignment(ratatui::layout::Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
