//! Bottleneck estimator
//!
//! Compares the graphics card's score against an *effective* processor score
//! (processor score scaled by the resolution modifier) and reports the
//! normalized imbalance between the two.
//!
//! # Algorithm
//!
//! ```text
//! effective   = processor.score * resolution.modifier
//! difference  = graphics.score - effective
//! denominator = (graphics.score + effective) / 2
//! percentage  = 0                                  if both scores are 0
//!             = |difference| / denominator * 100   otherwise
//! limiting    = GPU if difference < 0 else CPU     (a tie resolves to CPU)
//! balanced    = percentage < 10
//! ```
//!
//! The percentage is evaluated as `2 * |difference| / (graphics + effective)`,
//! the same value, which stays finite for subnormal scores. Scores above
//! [`MAX_SCORE`] are rejected so the sum cannot overflow.
//!
//! The balance check uses the unrounded percentage; the reported percentage is
//! rounded to one decimal place, half away from zero. Values above 100 are
//! reported as-is.
//!
//! # What This Explicitly Refuses To Do
//!
//! - Catalog lookup: callers resolve identifiers first
//! - I/O of any kind: the estimator is a pure function and safe to call from
//!   any number of threads

use serde::Serialize;

use crate::catalog::{
    valid_modifier, valid_score, GraphicsRecord, ProcessorRecord, ResolutionRecord, Selection,
    MAX_SCORE,
};
use crate::error::{BottleneckError, Result};
use crate::types::LimitingComponent;

/// Imbalance percentage below which a pairing counts as balanced
pub const BALANCE_THRESHOLD_PERCENT: f64 = 10.0;

/// Outcome of one estimation.
///
/// Fields are read through accessors so `is_balanced` and
/// `limiting_component` can never disagree after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BottleneckResult {
    processor: ProcessorRecord,
    graphics: GraphicsRecord,
    resolution: ResolutionRecord,
    percentage: f64,
    limiting_component: LimitingComponent,
    is_balanced: bool,
}

impl BottleneckResult {
    pub fn processor(&self) -> &ProcessorRecord {
        &self.processor
    }

    pub fn graphics(&self) -> &GraphicsRecord {
        &self.graphics
    }

    pub fn resolution(&self) -> &ResolutionRecord {
        &self.resolution
    }

    /// Imbalance magnitude, one decimal place, always `>= 0`
    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    pub fn limiting_component(&self) -> LimitingComponent {
        self.limiting_component
    }

    pub fn is_balanced(&self) -> bool {
        self.is_balanced
    }

    /// Processor score scaled by the resolution modifier
    pub fn effective_processor_score(&self) -> f64 {
        self.processor.score * self.resolution.modifier
    }
}

/// Estimate which component limits a processor/graphics/resolution pairing.
///
/// Fails only with `InvalidInput` when a score is negative or non-finite, or
/// when the resolution modifier lies outside (0, 1].
pub fn estimate(
    processor: &ProcessorRecord,
    graphics: &GraphicsRecord,
    resolution: &ResolutionRecord,
) -> Result<BottleneckResult> {
    check_inputs(processor, graphics, resolution)?;

    let effective = processor.score * resolution.modifier;
    let difference = graphics.score - effective;
    let sum = graphics.score + effective;

    // |difference| / (sum / 2) without halving first: a subnormal sum would
    // round to zero. Scores are non-negative, so the sum is zero only here.
    let percentage = if sum == 0.0 {
        0.0
    } else {
        (2.0 * difference.abs() / sum) * 100.0
    };

    let raw_limiting = if difference < 0.0 {
        LimitingComponent::Gpu
    } else {
        LimitingComponent::Cpu
    };
    let is_balanced = percentage < BALANCE_THRESHOLD_PERCENT;
    let limiting_component = if is_balanced {
        LimitingComponent::None
    } else {
        raw_limiting
    };

    tracing::debug!(
        processor = %processor.id,
        graphics = %graphics.id,
        resolution = %resolution.id,
        effective,
        percentage,
        %limiting_component,
        "Bottleneck estimated"
    );

    Ok(BottleneckResult {
        processor: processor.clone(),
        graphics: graphics.clone(),
        resolution: resolution.clone(),
        percentage: round_one_decimal(percentage),
        limiting_component,
        is_balanced,
    })
}

/// Estimate from a resolved catalog selection
pub fn estimate_selection(selection: &Selection<'_>) -> Result<BottleneckResult> {
    estimate(selection.processor, selection.graphics, selection.resolution)
}

fn check_inputs(
    processor: &ProcessorRecord,
    graphics: &GraphicsRecord,
    resolution: &ResolutionRecord,
) -> Result<()> {
    if !valid_score(processor.score) {
        return Err(BottleneckError::invalid_input(format!(
            "processor '{}' score {} must be within 0..={}",
            processor.id, processor.score, MAX_SCORE
        )));
    }
    if !valid_score(graphics.score) {
        return Err(BottleneckError::invalid_input(format!(
            "graphics card '{}' score {} must be within 0..={}",
            graphics.id, graphics.score, MAX_SCORE
        )));
    }
    if !valid_modifier(resolution.modifier) {
        return Err(BottleneckError::invalid_input(format!(
            "resolution '{}' modifier {} must be within (0, 1]",
            resolution.id, resolution.modifier
        )));
    }
    Ok(())
}

/// Round to one decimal place, half away from zero
pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
