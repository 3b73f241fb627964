//! User interface rendering module
//!
//! - `header` - Title block and navigation bar
//! - `form` - Catalog selectors and the calculate button
//! - `results` - Result panel, imbalance bar, performance breakdown and the
//!   AI analysis panel

mod form;
mod header;
pub mod results;

use crate::app::AppState;
use crate::catalog::Catalog;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Height of the result panel including borders
const RESULT_PANEL_HEIGHT: u16 = 13;

/// Top-level renderer
pub struct UiRenderer {
    help: HelpOverlay,
}

impl UiRenderer {
    pub fn new(keybinding_ctx: &KeybindingContext) -> Self {
        Self {
            help: HelpOverlay::new(keybinding_ctx),
        }
    }

    /// Render the complete UI based on application state
    pub fn render(
        &self,
        f: &mut Frame,
        state: &AppState,
        catalog: &Catalog,
        keybinding_ctx: &KeybindingContext,
    ) {
        let has_result = state.result.is_some();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                                          // header
                Constraint::Length(12),                                         // selectors
                Constraint::Length(2),                                          // button + error
                Constraint::Length(if has_result { RESULT_PANEL_HEIGHT } else { 0 }), // result
                Constraint::Min(0),                                             // analysis
                Constraint::Length(1),                                          // nav bar
            ])
            .split(f.area());

        header::render_header(f, chunks[0]);
        form::render_selectors(f, state, catalog, chunks[1]);
        form::render_actions(f, state, chunks[2]);

        if let Some(ref result) = state.result {
            results::render_result(f, result, chunks[3]);
            results::render_explanation(f, state, chunks[4]);
        }

        header::render_nav_bar(f, keybinding_ctx, chunks[5]);

        if state.help_visible {
            self.help.render(f, f.area());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(state: &AppState, catalog: &Catalog) -> String {
        let ctx = KeybindingContext::new();
        let renderer = UiRenderer::new(&ctx);
        let mut terminal = Terminal::new(TestBackend::new(120, 50)).unwrap();
        terminal
            .draw(|f| renderer.render(f, state, catalog, &ctx))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_initial_screen() {
        let catalog = Catalog::reference();
        let state = AppState::new(&catalog, &AppConfig::default());
        let screen = render_to_string(&state, &catalog);
        assert!(screen.contains("Bottleneck Solver"));
        assert!(screen.contains("Processor (CPU)"));
        assert!(screen.contains("AMD Ryzen 5 7600X"));
        assert!(screen.contains("Calculate Bottleneck"));
        assert!(!screen.contains("Calculation Result"));
    }

    #[test]
    fn test_result_screen() {
        let catalog = Catalog::reference();
        let mut state = AppState::new(&catalog, &AppConfig::default());
        state.calculate(&catalog).unwrap();
        let screen = render_to_string(&state, &catalog);
        assert!(screen.contains("Calculation Result"));
        assert!(screen.contains("CPU Bound"));
        assert!(screen.contains("GPU Bound"));
        assert!(screen.contains("Effective CPU Power"));
        assert!(screen.contains("Press E for an AI analysis"));
    }

    #[test]
    fn test_help_overlay_screen() {
        let catalog = Catalog::reference();
        let mut state = AppState::new(&catalog, &AppConfig::default());
        state.toggle_help();
        let screen = render_to_string(&state, &catalog);
        assert!(screen.contains("Bottleneck Solver Help"));
    }
}
