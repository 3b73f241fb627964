//! Centralized theme and styling for the TUI
//!
//! Single source of truth for the colors and styles used by the selector form
//! and the result panels.
//!
//! # Usage
//! ```rust
//! use bottleneck_solver::theme::{Colors, Styles, Theme};
//! use bottleneck_solver::LimitingComponent;
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! let verdict_style = Theme::verdict_style(LimitingComponent::Gpu);
//! ```

use ratatui::style::{Color, Modifier, Style};

use crate::types::LimitingComponent;

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors
    // -------------------------------------------------------------------------

    /// Gauge/bar track background
    pub const BG_GAUGE: Color = Color::Rgb(51, 65, 85);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Primary accent color - borders, titles, the calculate button
    pub const PRIMARY: Color = Color::Cyan;

    /// Selected list item highlight
    pub const SELECTED_BG: Color = Color::Cyan;

    /// Selected item text (for contrast on cyan bg)
    pub const SELECTED_FG: Color = Color::Black;

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Inactive/unfocused border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    /// Processor side of every chart
    pub const CPU: Color = Color::Rgb(249, 115, 22);

    /// Graphics side of every chart
    pub const GPU: Color = Color::Rgb(59, 130, 246);

    /// Balanced verdict
    pub const BALANCED: Color = Color::Green;

    /// Error/danger feedback
    pub const ERROR: Color = Color::Red;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Title text - bold primary color
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(focused: bool) -> Style {
        if focused {
            Style::default().fg(Colors::BORDER_ACTIVE)
        } else {
            Style::default().fg(Colors::BORDER_INACTIVE)
        }
    }

    /// Highlighted entry of a selector list
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Colors::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button(focused: bool, busy: bool) -> Style {
        if busy {
            Style::default().fg(Colors::FG_MUTED)
        } else if focused {
            Style::default()
                .fg(Colors::SELECTED_FG)
                .bg(Colors::PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Colors::PRIMARY)
        }
    }

    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }
}

// =============================================================================
// SEMANTIC STYLES
// =============================================================================

/// Styles derived from a result
pub struct Theme;

impl Theme {
    /// Color of the limiting side, or the balanced color
    pub fn verdict_color(component: LimitingComponent) -> Color {
        match component {
            LimitingComponent::Cpu => Colors::CPU,
            LimitingComponent::Gpu => Colors::GPU,
            LimitingComponent::None => Colors::BALANCED,
        }
    }

    pub fn verdict_style(component: LimitingComponent) -> Style {
        Style::default()
            .fg(Self::verdict_color(component))
            .add_modifier(Modifier::BOLD)
    }
}
