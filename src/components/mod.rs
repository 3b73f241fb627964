//! Reusable UI components
//!
//! - `keybindings` - Key-to-action registry, nav bar and help text
//! - `help_overlay` - Floating keybinding reference

pub mod help_overlay;
pub mod keybindings;
