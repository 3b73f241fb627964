//! Bottleneck Solver Library
//!
//! Estimates which component, processor or graphics card, limits gaming
//! performance at a given resolution, and by how much.
//!
//! ```
//! use bottleneck_solver::{estimate_selection, Catalog, LimitingComponent};
//!
//! let catalog = Catalog::reference();
//! let selection = catalog.resolve("i5-12400f", "rtx4090", "1080p")?;
//! let result = estimate_selection(&selection)?;
//! assert_eq!(result.percentage(), 28.6);
//! assert_eq!(result.limiting_component(), LimitingComponent::Cpu);
//! # Ok::<(), bottleneck_solver::BottleneckError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
pub mod error;
pub mod estimator;
pub mod explain;
pub mod report;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use catalog::{
    Catalog, GraphicsRecord, ProcessorRecord, ResolutionRecord, Selection, MAX_SCORE,
};
pub use config::{AppConfig, ExplanationConfig};
pub use error::{BottleneckError, Result};
pub use estimator::{estimate, estimate_selection, BottleneckResult, BALANCE_THRESHOLD_PERCENT};
pub use explain::{ExplanationHandle, ExplanationProvider, ExplanationRequest};
pub use types::{ComponentKind, LimitingComponent};
