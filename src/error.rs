//! Error handling module for the bottleneck solver
//!
//! Provides centralized error handling with proper error types using thiserror.
//! The estimator itself only ever produces `NotFound` and `InvalidInput`; the
//! remaining variants belong to the outer layers (files, terminal, explanation
//! service).

use crate::types::ComponentKind;
use thiserror::Error;

/// Main error type for the bottleneck solver
#[derive(Error, Debug)]
pub enum BottleneckError {
    /// Catalog lookup miss
    #[error("{kind} '{id}' not found in catalog")]
    NotFound { kind: ComponentKind, id: String },

    /// Numeric field outside its domain (score < 0, modifier outside (0, 1])
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Explanation service failures (never raised by the estimator)
    #[error("Explanation service failed: {0}")]
    ExternalService(String),

    /// Catalog contents rejected during validation
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for bottleneck solver operations
pub type Result<T> = std::result::Result<T, BottleneckError>;

impl BottleneckError {
    /// Create a catalog lookup miss
    pub fn not_found(kind: ComponentKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an explanation service error
    pub fn external_service(msg: impl Into<String>) -> Self {
        Self::ExternalService(msg.into())
    }

    /// Create a catalog validation error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Whether the caller should surface this as rejected user input.
    ///
    /// Rejected input must not be retried with the same selection.
    pub fn is_rejected_input(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::InvalidInput(_))
    }
}
