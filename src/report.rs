//! Result presentation helpers
//!
//! Turns a `BottleneckResult` into the user-facing wording and bar-fill
//! amounts shared by the terminal UI and the `calculate` command.

use crate::catalog::Catalog;
use crate::estimator::BottleneckResult;
use crate::types::{ComponentKind, LimitingComponent};

/// Scale used by the performance breakdown bars
pub const BAR_SCALE_MAX: f64 = 100.0;

/// Large headline: a verdict when balanced, otherwise the percentage
pub fn headline(result: &BottleneckResult) -> String {
    if result.is_balanced() {
        "Excellent Match!".to_string()
    } else {
        format!("{}%", result.percentage())
    }
}

/// One-sentence summary naming the components
pub fn summary(result: &BottleneckResult) -> String {
    if result.is_balanced() {
        format!(
            "Your {} and {} are well-balanced at {}.",
            result.processor().name,
            result.graphics().name,
            result.resolution().name
        )
    } else {
        format!(
            "Your {} is the bottleneck by {}% at {}.",
            result.limiting_component(),
            result.percentage(),
            result.resolution().name
        )
    }
}

/// Canned explanation paragraph for the outcome
pub fn explanation(result: &BottleneckResult) -> &'static str {
    match result.limiting_component() {
        LimitingComponent::None => {
            "This is a great pairing for gaming at your selected resolution. Neither component \
             is significantly holding the other back, which should result in a smooth and \
             consistent experience."
        }
        LimitingComponent::Gpu => {
            "Your CPU can prepare frames faster than your GPU can render them at this resolution. \
             This means your graphics card is the main performance-limiting factor, and a GPU \
             upgrade would yield better framerates."
        }
        LimitingComponent::Cpu => {
            "Your GPU is not being fully utilized because it's waiting on the CPU to handle game \
             logic and prepare frames. A more powerful CPU would unlock your GPU's full potential \
             and improve performance."
        }
    }
}

/// Fill of the CPU-bound/GPU-bound bar in percent of one half.
///
/// Balanced results draw nothing; otherwise the percentage capped at 100.
pub fn imbalance_fill(result: &BottleneckResult) -> u16 {
    if result.limiting_component().is_limited() {
        result.percentage().clamp(0.0, 100.0).round() as u16
    } else {
        0
    }
}

/// Effective processor score as shown in the breakdown chart
pub fn displayed_processor_score(result: &BottleneckResult) -> f64 {
    result.effective_processor_score().round()
}

/// Bar width in percent for a score on the 0..=100 scale
pub fn score_bar_percent(score: f64) -> u16 {
    ((score / BAR_SCALE_MAX) * 100.0).clamp(0.0, 100.0).round() as u16
}

/// Number of filled cells for a bar of `width` cells at `percent`
pub fn filled_cells(width: u16, percent: u16) -> u16 {
    let percent = percent.min(100) as u32;
    ((width as u32 * percent + 50) / 100) as u16
}

/// Plain-text report printed by the `calculate` command
pub fn render_text(result: &BottleneckResult) -> String {
    let mut lines = Vec::new();

    lines.push(format!("CPU:        {}", result.processor().name));
    lines.push(format!("GPU:        {}", result.graphics().name));
    lines.push(format!("Resolution: {}", result.resolution().name));
    lines.push(String::new());
    lines.push(headline(result));
    lines.push(summary(result));
    lines.push(explanation(result).to_string());
    lines.push(String::new());
    lines.push("Performance Breakdown".to_string());
    lines.push(format!(
        "  Effective CPU Power  {:>3}",
        displayed_processor_score(result)
    ));
    lines.push(format!("  GPU Power            {:>3}", result.graphics().score));
    lines.push(format!(
        "  Effective CPU power is adjusted for {}.",
        result.resolution().name
    ));

    lines.join("\n")
}

/// Plain-text listing of a catalog collection
pub fn render_catalog(catalog: &Catalog, kind: ComponentKind) -> String {
    let mut lines = vec![kind.plural_title().to_string()];

    match kind {
        ComponentKind::Processor => {
            for p in catalog.processors() {
                lines.push(format!("  {:<12} {:<28} score {}", p.id, p.name, p.score));
            }
        }
        ComponentKind::Graphics => {
            for g in catalog.graphics() {
                lines.push(format!("  {:<12} {:<28} score {}", g.id, g.name, g.score));
            }
        }
        ComponentKind::Resolution => {
            for r in catalog.resolutions() {
                lines.push(format!("  {:<12} {:<28} modifier {}", r.id, r.name, r.modifier));
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{GraphicsRecord, ProcessorRecord, ResolutionRecord};
    use crate::estimator::estimate;

    fn reference_result(cpu: &str, gpu: &str, res: &str) -> BottleneckResult {
        let catalog = Catalog::reference();
        let selection = catalog.resolve(cpu, gpu, res).unwrap();
        crate::estimator::estimate_selection(&selection).unwrap()
    }

    #[test]
    fn test_balanced_wording() {
        let result = reference_result("i9-13900k", "rtx4090", "1080p");
        assert_eq!(headline(&result), "Excellent Match!");
        assert_eq!(
            summary(&result),
            "Your Intel Core i9-13900K and NVIDIA GeForce RTX 4090 are well-balanced at 1080p (Full HD)."
        );
        assert!(explanation(&result).starts_with("This is a great pairing"));
        assert_eq!(imbalance_fill(&result), 0);
    }

    #[test]
    fn test_cpu_limited_wording() {
        // 75 vs 100 at 1080p
        let result = reference_result("i5-12400f", "rtx4090", "1080p");
        assert_eq!(headline(&result), "28.6%");
        assert_eq!(
            summary(&result),
            "Your CPU is the bottleneck by 28.6% at 1080p (Full HD)."
        );
        assert!(explanation(&result).contains("more powerful CPU"));
        assert_eq!(imbalance_fill(&result), 29);
    }

    #[test]
    fn test_gpu_limited_wording() {
        // 100 vs 65 at 1080p
        let result = reference_result("i9-13900k", "rtx3060", "1080p");
        assert_eq!(result.limiting_component(), LimitingComponent::Gpu);
        assert!(summary(&result).starts_with("Your GPU is the bottleneck by"));
        assert!(explanation(&result).contains("GPU upgrade"));
    }

    #[test]
    fn test_imbalance_fill_is_capped() {
        let result = estimate(
            &ProcessorRecord::new("c", "C", 100.0),
            &GraphicsRecord::new("g", "G", 0.0),
            &ResolutionRecord::new("r", "R", 1.0),
        )
        .unwrap();
        assert_eq!(result.percentage(), 200.0);
        assert_eq!(headline(&result), "200%");
        assert_eq!(imbalance_fill(&result), 100);
    }

    #[test]
    fn test_breakdown_scores() {
        // 85 * 0.85 = 72.25 shown as 72
        let result = reference_result("r5-7600x", "rtx4090", "1440p");
        assert_eq!(displayed_processor_score(&result), 72.0);
        assert_eq!(score_bar_percent(displayed_processor_score(&result)), 72);
        assert_eq!(score_bar_percent(150.0), 100);
        assert_eq!(score_bar_percent(0.0), 0);
    }

    #[test]
    fn test_filled_cells() {
        assert_eq!(filled_cells(40, 0), 0);
        assert_eq!(filled_cells(40, 50), 20);
        assert_eq!(filled_cells(40, 100), 40);
        assert_eq!(filled_cells(40, 250), 40);
        assert_eq!(filled_cells(0, 80), 0);
    }

    #[test]
    fn test_render_text_contains_sections() {
        let result = reference_result("i9-13900k", "rtx3060", "2160p");
        let text = render_text(&result);
        assert!(text.contains("CPU:        Intel Core i9-13900K"));
        assert!(text.contains("Excellent Match!"));
        assert!(text.contains("Effective CPU Power   70"));
        assert!(text.contains("adjusted for 4K (UHD)"));
    }

    #[test]
    fn test_render_catalog() {
        let catalog = Catalog::reference();
        let text = render_catalog(&catalog, ComponentKind::Resolution);
        assert!(text.starts_with("Screen Resolutions"));
        assert!(text.contains("2160p"));
        assert!(text.contains("modifier 0.85"));
    }
}
