//! Result and explanation panels
//!
//! The imbalance bar is split at the center: CPU-bound results fill the left
//! half toward the left edge, GPU-bound results fill the right half toward the
//! right edge. Balanced results draw an empty bar with a "Balanced" marker.

use crate::app::{AppState, ExplanationState};
use crate::estimator::BottleneckResult;
use crate::report;
use crate::theme::{Colors, Styles, Theme};
use crate::types::LimitingComponent;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Render the calculation result panel
pub fn render_result(f: &mut Frame, result: &BottleneckResult, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Calculation Result ")
        .title_style(Styles::title())
        .border_style(Style::default().fg(Colors::BORDER_INACTIVE));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // headline
            Constraint::Length(1), // summary
            Constraint::Min(2),    // explanation
            Constraint::Length(1), // bar labels
            Constraint::Length(1), // imbalance bar
            Constraint::Length(1), // spacer
            Constraint::Length(1), // cpu gauge
            Constraint::Length(1), // gpu gauge
            Constraint::Length(1), // footnote
        ])
        .split(inner);

    let verdict = Theme::verdict_style(result.limiting_component());
    f.render_widget(
        Paragraph::new(report::headline(result))
            .style(verdict)
            .alignment(Alignment::Center),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(report::summary(result))
            .style(Styles::text_secondary())
            .alignment(Alignment::Center),
        chunks[1],
    );
    f.render_widget(
        Paragraph::new(report::explanation(result))
            .style(Styles::text_muted())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[2],
    );

    render_bar_labels(f, chunks[3]);
    f.render_widget(Paragraph::new(imbalance_bar(result, chunks[4].width)), chunks[4]);

    let processor_score = report::displayed_processor_score(result);
    render_score_gauge(f, chunks[6], "Effective CPU Power", processor_score, Colors::CPU);
    render_score_gauge(f, chunks[7], "GPU Power", result.graphics().score, Colors::GPU);

    f.render_widget(
        Paragraph::new(format!(
            "Effective CPU power is adjusted for {}. At higher resolutions, the GPU bears more load.",
            result.resolution().name
        ))
        .style(Styles::text_muted())
        .alignment(Alignment::Center),
        chunks[8],
    );
}

fn render_bar_labels(f: &mut Frame, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let bold = |color| Style::default().fg(color).add_modifier(Modifier::BOLD);
    f.render_widget(Paragraph::new("CPU Bound").style(bold(Colors::CPU)), halves[0]);
    f.render_widget(
        Paragraph::new("GPU Bound")
            .style(bold(Colors::GPU))
            .alignment(Alignment::Right),
        halves[1],
    );
}

/// Build the center-split imbalance bar for a given width
pub fn imbalance_bar(result: &BottleneckResult, width: u16) -> Line<'static> {
    let half = width.saturating_sub(1) / 2;
    let fill = report::filled_cells(half, report::imbalance_fill(result));
    let track = Style::default().bg(Colors::BG_GAUGE);

    let (cpu_fill, gpu_fill) = match result.limiting_component() {
        LimitingComponent::Cpu => (fill, 0),
        LimitingComponent::Gpu => (0, fill),
        LimitingComponent::None => (0, 0),
    };

    let mut spans = vec![
        Span::styled(" ".repeat((half - cpu_fill) as usize), track),
        Span::styled(" ".repeat(cpu_fill as usize), Style::default().bg(Colors::CPU)),
        Span::styled("│", Style::default().fg(Colors::FG_PRIMARY).bg(Colors::BG_GAUGE)),
        Span::styled(" ".repeat(gpu_fill as usize), Style::default().bg(Colors::GPU)),
        Span::styled(" ".repeat((half - gpu_fill) as usize), track),
    ];

    if result.is_balanced() {
        spans.push(Span::styled(
            " Balanced ",
            Style::default()
                .fg(Colors::SELECTED_FG)
                .bg(Colors::BALANCED)
                .add_modifier(Modifier::BOLD),
        ));
    }

    Line::from(spans)
}

fn render_score_gauge(f: &mut Frame, area: Rect, label: &str, score: f64, color: ratatui::style::Color) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(10)])
        .split(area);

    f.render_widget(
        Paragraph::new(label.to_string())
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Right),
        columns[0],
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Colors::BG_GAUGE))
        .percent(report::score_bar_percent(score))
        .label(format!("{}", score));
    f.render_widget(gauge, columns[1]);
}

/// Render the AI analysis panel
pub fn render_explanation(f: &mut Frame, state: &AppState, area: Rect) {
    let (text, style) = match &state.explanation {
        ExplanationState::Idle => (
            "Press E for an AI analysis of this result.".to_string(),
            Styles::text_muted(),
        ),
        ExplanationState::Pending => (
            format!(
                "{} Generating analysis... (Esc to cancel)",
                SPINNER[state.tick % SPINNER.len()]
            ),
            Style::default().fg(Colors::PRIMARY),
        ),
        ExplanationState::Ready(text) => (text.clone(), Styles::text()),
        ExplanationState::Failed(message) => (message.clone(), Styles::error()),
        ExplanationState::Unavailable => (
            "AI analysis is unavailable: no API key configured.".to_string(),
            Styles::text_muted(),
        ),
    };

    let widget = Paragraph::new(text)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" AI Analysis ")
                .border_style(Style::default().fg(Colors::BORDER_INACTIVE)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}
