//! Application module
//!
//! Contains the main application logic, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, Focus, ExplanationState)
//! - Main module - App struct and event loop

mod state;

pub use state::{AppState, ExplanationState, Focus};

use crate::catalog::Catalog;
use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::config::AppConfig;
use crate::error::{BottleneckError, Result};
use crate::explain::{spawn_explanation, ExplanationHandle, ExplanationPoll, ExplanationProvider, ExplanationRequest};
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Main application struct
pub struct App {
    state: AppState,
    catalog: Arc<Catalog>,
    ui_renderer: UiRenderer,
    keybinding_context: KeybindingContext,
    /// Explanation backend, absent when not configured
    provider: Option<Arc<dyn ExplanationProvider>>,
    /// Explanation currently in flight
    pending: Option<ExplanationHandle>,
}

impl App {
    /// Create a new application instance
    pub fn new(
        catalog: Arc<Catalog>,
        config: &AppConfig,
        provider: Option<Arc<dyn ExplanationProvider>>,
    ) -> Self {
        info!("Creating new App instance");
        let keybinding_context = KeybindingContext::new();

        Self {
            state: AppState::new(&catalog, config),
            ui_renderer: UiRenderer::new(&keybinding_context),
            catalog,
            keybinding_context,
            provider,
            pending: None,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main event loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            self.poll_explanation();

            if crossterm::event::poll(Duration::from_millis(50))? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    if key_event.kind == KeyEventKind::Press && self.handle_key_event(key_event) {
                        break;
                    }
                }
            }

            self.state.tick = self.state.tick.wrapping_add(1);
            terminal
                .draw(|f| {
                    self.ui_renderer
                        .render(f, &self.state, &self.catalog, &self.keybinding_context)
                })
                .map_err(|e| BottleneckError::terminal(format!("Failed to draw: {}", e)))?;
        }

        self.cancel_explanation();
        info!("Application loop finished");
        Ok(())
    }

    /// Handle a key press. Returns true when the user asked to quit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        let Some(action) = self.keybinding_context.action_for(&key_event) else {
            return false;
        };
        debug!(?action, "Key action");

        if self.state.help_visible && !matches!(action, KeyAction::Help | KeyAction::Cancel | KeyAction::Quit) {
            return false;
        }

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.state.toggle_help(),
            KeyAction::NextField => self.state.focus_next(),
            KeyAction::PreviousField => self.state.focus_previous(),
            KeyAction::SelectionUp => self.state.select_previous(&self.catalog),
            KeyAction::SelectionDown => self.state.select_next(&self.catalog),
            KeyAction::Calculate => self.calculate(),
            KeyAction::Explain => self.request_explanation(),
            KeyAction::Cancel => {
                if self.state.help_visible {
                    self.state.toggle_help();
                } else {
                    self.cancel_explanation();
                }
            }
        }
        false
    }

    /// Recalculate; any explanation of the previous result is abandoned
    fn calculate(&mut self) {
        self.cancel_explanation();
        // Rejected input is kept in state.error for display
        let _ = self.state.calculate(&self.catalog);
    }

    fn request_explanation(&mut self) {
        if self.pending.is_some() {
            return;
        }
        let Some(result) = self.state.result.as_ref() else {
            return;
        };
        let Some(provider) = self.provider.clone() else {
            self.state.explanation = ExplanationState::Unavailable;
            return;
        };

        let request = ExplanationRequest::from(result);
        if self.state.begin_explanation() {
            self.pending = Some(spawn_explanation(provider, request));
        }
    }

    fn cancel_explanation(&mut self) {
        if let Some(handle) = self.pending.take() {
            debug!("Cancelling explanation from {}", handle.provider());
            handle.cancel();
            self.state.explanation_cancelled();
        }
    }

    /// Move a finished explanation into the state without blocking
    pub fn poll_explanation(&mut self) {
        let Some(handle) = self.pending.as_ref() else {
            return;
        };
        match handle.poll() {
            ExplanationPoll::Pending => {}
            ExplanationPoll::Ready(Ok(text)) => {
                info!("Explanation received");
                self.state.explanation_ready(text);
                self.pending = None;
            }
            ExplanationPoll::Ready(Err(e)) => {
                self.state.explanation_failed(&e);
                self.pending = None;
            }
            ExplanationPoll::Closed => {
                self.state.explanation_failed(&BottleneckError::external_service(
                    "worker stopped without a reply",
                ));
                self.pending = None;
            }
        }
    }

    pub fn has_pending_explanation(&self) -> bool {
        self.pending.is_some()
    }
}
