//! Keybinding registry for the selector form
//!
//! Maps key events to actions and provides the nav bar and help overlay text.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NextField,
    PreviousField,
    SelectionUp,
    SelectionDown,
    Calculate,
    Explain,
    Cancel,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
    /// Shown in the bottom navigation bar
    pub in_nav_bar: bool,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
            in_nav_bar: false,
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            modifiers,
            ..Self::new(key, action, display, description)
        }
    }

    fn nav(mut self) -> Self {
        self.in_nav_bar = true;
        self
    }

    fn matches(&self, event: &KeyEvent) -> bool {
        if self.key != event.code {
            return false;
        }
        // Shift is implied by BackTab and upper-case characters
        let relevant = event.modifiers & !KeyModifiers::SHIFT;
        relevant == (self.modifiers & !KeyModifiers::SHIFT)
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

/// Keybinding registry
pub struct KeybindingContext {
    bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        Self {
            bindings: vec![
                Keybinding::new(KeyCode::Tab, KeyAction::NextField, "Tab", "Next field").nav(),
                Keybinding::new(KeyCode::Right, KeyAction::NextField, "Right", "Next field"),
                Keybinding::new(KeyCode::BackTab, KeyAction::PreviousField, "S-Tab", "Previous field"),
                Keybinding::new(KeyCode::Left, KeyAction::PreviousField, "Left", "Previous field"),
                Keybinding::new(KeyCode::Up, KeyAction::SelectionUp, "Up", "Previous entry"),
                Keybinding::new(KeyCode::Down, KeyAction::SelectionDown, "Down", "Next entry").nav(),
                Keybinding::new(KeyCode::Enter, KeyAction::Calculate, "Enter", "Calculate").nav(),
                Keybinding::new(KeyCode::Char('e'), KeyAction::Explain, "E", "AI analysis").nav(),
                Keybinding::new(KeyCode::Esc, KeyAction::Cancel, "Esc", "Cancel analysis / close help"),
                Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help").nav(),
                Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit").nav(),
                Keybinding::with_modifiers(
                    KeyCode::Char('c'),
                    KeyModifiers::CONTROL,
                    KeyAction::Quit,
                    "Ctrl-C",
                    "Quit",
                ),
            ],
        }
    }

    /// Action bound to a key event
    pub fn action_for(&self, event: &KeyEvent) -> Option<KeyAction> {
        self.bindings
            .iter()
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Items for the bottom navigation bar
    pub fn nav_items(&self) -> Vec<NavBarItem> {
        self.bindings
            .iter()
            .filter(|b| b.in_nav_bar)
            .map(|b| NavBarItem {
                key_display: b.display.clone(),
                action_label: b.description.clone(),
            })
            .collect()
    }

    /// Full help content for the help overlay
    pub fn help_content(&self) -> Vec<HelpSection> {
        let section = |title: &str, filter: fn(KeyAction) -> bool| HelpSection {
            title: title.to_string(),
            items: self
                .bindings
                .iter()
                .filter(|b| filter(b.action))
                .map(|b| (b.display.clone(), b.description.clone()))
                .collect(),
        };

        vec![
            section("Navigation", |a| {
                matches!(
                    a,
                    KeyAction::NextField
                        | KeyAction::PreviousField
                        | KeyAction::SelectionUp
                        | KeyAction::SelectionDown
                )
            }),
            section("Actions", |a| {
                matches!(a, KeyAction::Calculate | KeyAction::Explain | KeyAction::Cancel)
            }),
            section("General", |a| matches!(a, KeyAction::Help | KeyAction::Quit)),
        ]
    }
}
