//! Header and navigation bar rendering

use crate::components::keybindings::KeybindingContext;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title block
pub fn render_header(f: &mut Frame, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let lines = vec![
        Line::from(Span::styled("Bottleneck Solver", Styles::title())),
        Line::from(Span::styled(
            "not just a calculator",
            Styles::text_muted().add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(
            "Find out if your CPU and GPU are a good match at your gaming resolution.",
            Styles::text_secondary(),
        )),
    ];

    let header = Paragraph::new(lines)
        .block(Block::default().borders(Borders::NONE))
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

/// Render the navigation bar
pub fn render_nav_bar(f: &mut Frame, keybinding_ctx: &KeybindingContext, area: Rect) {
    let mut spans = Vec::new();
    for (i, item) in keybinding_ctx.nav_items().into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Styles::nav_hint()));
        }
        spans.push(Span::styled(
            format!("[{}]", item.key_display),
            Style::default()
                .fg(Colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}", item.action_label), Styles::nav_hint()));
    }

    let nav = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(nav, area);
}
