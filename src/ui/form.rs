//! Selector form rendering
//!
//! Three catalog lists side by side and the calculate button beneath them.

use crate::app::{AppState, Focus};
use crate::catalog::Catalog;
use crate::theme::{Styles, Theme};
use crate::types::ComponentKind;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the three selectors
pub fn render_selectors(f: &mut Frame, state: &AppState, catalog: &Catalog, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let selectors = [
        (ComponentKind::Processor, Focus::Processor, "Processor (CPU)"),
        (ComponentKind::Graphics, Focus::Graphics, "Graphics Card (GPU)"),
        (ComponentKind::Resolution, Focus::Resolution, "Screen Resolution"),
    ];

    for ((kind, focus, label), column) in selectors.into_iter().zip(columns.iter()) {
        render_selector(f, state, catalog, kind, state.focus == focus, label, *column);
    }
}

fn render_selector(
    f: &mut Frame,
    state: &AppState,
    catalog: &Catalog,
    kind: ComponentKind,
    focused: bool,
    label: &str,
    area: Rect,
) {
    let items: Vec<ListItem> = catalog
        .entries(kind)
        .into_iter()
        .map(|(_, name)| ListItem::new(name.to_string()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", label))
                .border_style(Styles::border(focused)),
        )
        .style(Styles::text_secondary())
        .highlight_style(if focused {
            Styles::selected()
        } else {
            Styles::text()
        })
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(Some(state.selected(kind)));
    f.render_stateful_widget(list, area, &mut list_state);
}

/// Render the calculate button and the error line
pub fn render_actions(f: &mut Frame, state: &AppState, area: Rect) {
    let busy = state.is_busy();
    let label = if busy {
        "  Generating analysis...  "
    } else {
        "  Calculate Bottleneck  "
    };

    let mut lines = vec![Line::from(Span::styled(
        label,
        Styles::button(state.focus == Focus::Calculate, busy),
    ))];

    if let Some(ref error) = state.error {
        lines.push(Line::from(Span::styled(error.clone(), Styles::error())));
    } else if let Some(ref result) = state.result {
        lines.push(Line::from(Span::styled(
            format!(
                "Last result: {} ({}%)",
                result.limiting_component(),
                result.percentage()
            ),
            Theme::verdict_style(result.limiting_component()),
        )));
    }

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
