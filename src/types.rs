//! Type-safe classification types for the bottleneck solver
//!
//! Replaces stringly-typed "CPU"/"GPU"/"None" values with proper Rust enums
//! that provide compile-time validation and exhaustive matching.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Component presumed to cap overall throughput
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum LimitingComponent {
    #[strum(serialize = "CPU")]
    #[serde(rename = "CPU")]
    Cpu,
    #[strum(serialize = "GPU")]
    #[serde(rename = "GPU")]
    Gpu,
    /// Balanced pairing, no limiting side
    #[strum(serialize = "None")]
    #[serde(rename = "None")]
    None,
}

impl LimitingComponent {
    /// Check if a limiting side was identified
    pub fn is_limited(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Catalog collection a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    #[strum(to_string = "Processor", serialize = "processor", serialize = "processors", serialize = "cpu")]
    Processor,
    #[strum(to_string = "Graphics card", serialize = "graphics", serialize = "gpu")]
    Graphics,
    #[strum(to_string = "Resolution", serialize = "resolution", serialize = "resolutions")]
    Resolution,
}

impl ComponentKind {
    /// Heading used when listing a collection
    pub fn plural_title(&self) -> &'static str {
        match self {
            Self::Processor => "Processors (CPU)",
            Self::Graphics => "Graphics Cards (GPU)",
            Self::Resolution => "Screen Resolutions",
        }
    }
}
