//! Application state definitions
//!
//! Holds the selector form, the last result and the explanation panel. All
//! transitions are plain methods so they can be exercised without a terminal.

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::error::BottleneckError;
use crate::estimator::{estimate_selection, BottleneckResult};
use crate::types::ComponentKind;

/// Form element with keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    Processor,
    Graphics,
    Resolution,
    Calculate,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Self::Processor => Self::Graphics,
            Self::Graphics => Self::Resolution,
            Self::Resolution => Self::Calculate,
            Self::Calculate => Self::Processor,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Processor => Self::Calculate,
            Self::Graphics => Self::Processor,
            Self::Resolution => Self::Graphics,
            Self::Calculate => Self::Resolution,
        }
    }

    /// Catalog collection edited by this element, if any
    pub fn kind(self) -> Option<ComponentKind> {
        match self {
            Self::Processor => Some(ComponentKind::Processor),
            Self::Graphics => Some(ComponentKind::Graphics),
            Self::Resolution => Some(ComponentKind::Resolution),
            Self::Calculate => None,
        }
    }
}

/// State of the explanation panel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExplanationState {
    /// Nothing requested for the current result
    #[default]
    Idle,
    /// Waiting on the service
    Pending,
    Ready(String),
    /// Service failed; the result is still valid
    Failed(String),
    /// No provider configured
    Unavailable,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub focus: Focus,
    pub processor_index: usize,
    pub graphics_index: usize,
    pub resolution_index: usize,
    /// Last computed result
    pub result: Option<BottleneckResult>,
    /// User-facing error from the last calculation
    pub error: Option<String>,
    pub explanation: ExplanationState,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Frame counter driving the loading spinner
    pub tick: usize,
}

impl AppState {
    /// Initial state with the configured default selections.
    ///
    /// Unknown defaults fall back to the first catalog entry.
    pub fn new(catalog: &Catalog, config: &AppConfig) -> Self {
        Self {
            focus: Focus::Processor,
            processor_index: default_index(catalog, ComponentKind::Processor, &config.default_processor),
            graphics_index: default_index(catalog, ComponentKind::Graphics, &config.default_graphics),
            resolution_index: default_index(
                catalog,
                ComponentKind::Resolution,
                &config.default_resolution,
            ),
            result: None,
            error: None,
            explanation: ExplanationState::Idle,
            help_visible: false,
            tick: 0,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Selected index for a collection
    pub fn selected(&self, kind: ComponentKind) -> usize {
        match kind {
            ComponentKind::Processor => self.processor_index,
            ComponentKind::Graphics => self.graphics_index,
            ComponentKind::Resolution => self.resolution_index,
        }
    }

    fn selected_mut(&mut self, kind: ComponentKind) -> &mut usize {
        match kind {
            ComponentKind::Processor => &mut self.processor_index,
            ComponentKind::Graphics => &mut self.graphics_index,
            ComponentKind::Resolution => &mut self.resolution_index,
        }
    }

    /// Move the focused selector down one entry, wrapping around
    pub fn select_next(&mut self, catalog: &Catalog) {
        if let Some(kind) = self.focus.kind() {
            let len = catalog.len(kind);
            if len > 0 {
                let index = self.selected_mut(kind);
                *index = (*index + 1) % len;
            }
        }
    }

    /// Move the focused selector up one entry, wrapping around
    pub fn select_previous(&mut self, catalog: &Catalog) {
        if let Some(kind) = self.focus.kind() {
            let len = catalog.len(kind);
            if len > 0 {
                let index = self.selected_mut(kind);
                *index = (*index + len - 1) % len;
            }
        }
    }

    /// Identifiers of the current selections
    pub fn selected_ids<'a>(&self, catalog: &'a Catalog) -> (&'a str, &'a str, &'a str) {
        let id_at = |kind: ComponentKind| {
            catalog
                .entries(kind)
                .get(self.selected(kind))
                .map(|(id, _)| *id)
                .unwrap_or("")
        };
        (
            id_at(ComponentKind::Processor),
            id_at(ComponentKind::Graphics),
            id_at(ComponentKind::Resolution),
        )
    }

    /// Resolve the selections and run the estimator.
    ///
    /// Clears the previous result and explanation first; on rejected input the
    /// error message is kept for display and no result is stored.
    pub fn calculate(&mut self, catalog: &Catalog) -> Result<(), BottleneckError> {
        self.result = None;
        self.error = None;
        self.explanation = ExplanationState::Idle;

        let (processor, graphics, resolution) = self.selected_ids(catalog);
        let outcome = catalog
            .resolve(processor, graphics, resolution)
            .and_then(|selection| estimate_selection(&selection));

        match outcome {
            Ok(result) => {
                tracing::info!(
                    percentage = result.percentage(),
                    limiting = %result.limiting_component(),
                    "Calculation complete"
                );
                self.result = Some(result);
                Ok(())
            }
            Err(e) if e.is_rejected_input() => {
                tracing::warn!("Calculation rejected: {}", e);
                self.error = Some(match &e {
                    BottleneckError::NotFound { .. } => {
                        "Please select a valid CPU, GPU, and resolution.".to_string()
                    }
                    _ => e.to_string(),
                });
                Err(e)
            }
            Err(e) => {
                tracing::error!("Calculation failed: {}", e);
                self.error = Some(format!("Calculation failed: {}", e));
                Err(e)
            }
        }
    }

    /// Mark an explanation as requested. Returns false when there is no result.
    pub fn begin_explanation(&mut self) -> bool {
        if self.result.is_none() {
            return false;
        }
        self.explanation = ExplanationState::Pending;
        true
    }

    pub fn explanation_ready(&mut self, text: String) {
        self.explanation = ExplanationState::Ready(text);
    }

    /// Record a service failure without touching the result
    pub fn explanation_failed(&mut self, error: &BottleneckError) {
        self.explanation = ExplanationState::Failed(format!(
            "Failed to get analysis from the explanation service: {}",
            error
        ));
    }

    pub fn explanation_cancelled(&mut self) {
        if self.explanation == ExplanationState::Pending {
            self.explanation = ExplanationState::Idle;
        }
    }

    pub fn is_busy(&self) -> bool {
        self.explanation == ExplanationState::Pending
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }
}

fn default_index(catalog: &Catalog, kind: ComponentKind, id: &str) -> usize {
    catalog.position(kind, id).unwrap_or_else(|| {
        tracing::warn!("Default {} '{}' not in catalog, using first entry", kind, id);
        0
    })
}
