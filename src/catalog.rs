//! Component catalog
//!
//! Read-only reference data the estimator is fed from: processors, graphics
//! cards, and screen resolutions. A catalog is an explicitly constructed value,
//! either the built-in reference data or a JSON file, and is never mutated
//! after construction.
//!
//! # File Format
//!
//! ```json
//! {
//!   "processors":  [{ "id": "i5-12400f", "name": "Intel Core i5-12400F", "score": 75 }],
//!   "graphics":    [{ "id": "rtx3060", "name": "NVIDIA GeForce RTX 3060", "score": 65 }],
//!   "resolutions": [{ "id": "1080p", "name": "1080p (Full HD)", "modifier": 1.0 }]
//! }
//! ```

use anyhow::{Context, Result as AnyResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{BottleneckError, Result};
use crate::types::ComponentKind;

/// Largest accepted processor or graphics score.
///
/// Reference data tops out at 100; the cap keeps the estimator's sums and
/// differences far from f64 overflow.
pub const MAX_SCORE: f64 = 1.0e6;

/// A processor and its relative performance score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessorRecord {
    pub id: String,
    pub name: String,
    /// Relative performance unit, 100 for the fastest reference part
    pub score: f64,
}

/// A graphics card and its relative performance score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphicsRecord {
    pub id: String,
    pub name: String,
    /// Relative performance unit, 100 for the fastest reference part
    pub score: f64,
}

/// A display resolution and the factor applied to processor scores at it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionRecord {
    pub id: String,
    pub name: String,
    /// In (0, 1]; lower values shift load toward the graphics card
    pub modifier: f64,
}

impl ProcessorRecord {
    pub fn new(id: &str, name: &str, score: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            score,
        }
    }
}

impl GraphicsRecord {
    pub fn new(id: &str, name: &str, score: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            score,
        }
    }
}

impl ResolutionRecord {
    pub fn new(id: &str, name: &str, modifier: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            modifier,
        }
    }
}

/// One resolved record from each collection
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    pub processor: &'a ProcessorRecord,
    pub graphics: &'a GraphicsRecord,
    pub resolution: &'a ResolutionRecord,
}

/// The three catalog collections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    processors: Vec<ProcessorRecord>,
    graphics: Vec<GraphicsRecord>,
    resolutions: Vec<ResolutionRecord>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::reference()
    }
}

impl Catalog {
    /// Build a catalog from explicit collections, validating its contents
    pub fn new(
        processors: Vec<ProcessorRecord>,
        graphics: Vec<GraphicsRecord>,
        resolutions: Vec<ResolutionRecord>,
    ) -> Result<Self> {
        let catalog = Self {
            processors,
            graphics,
            resolutions,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Built-in reference data
    pub fn reference() -> Self {
        Self {
            processors: vec![
                ProcessorRecord::new("i5-12400f", "Intel Core i5-12400F", 75.0),
                ProcessorRecord::new("i5-13600k", "Intel Core i5-13600K", 88.0),
                ProcessorRecord::new("i7-13700k", "Intel Core i7-13700K", 95.0),
                ProcessorRecord::new("i9-13900k", "Intel Core i9-13900K", 100.0),
                ProcessorRecord::new("r5-5600x", "AMD Ryzen 5 5600X", 72.0),
                ProcessorRecord::new("r5-7600x", "AMD Ryzen 5 7600X", 85.0),
                ProcessorRecord::new("r7-7800x3d", "AMD Ryzen 7 7800X3D", 96.0),
                ProcessorRecord::new("r9-7950x", "AMD Ryzen 9 7950X", 99.0),
            ],
            graphics: vec![
                GraphicsRecord::new("rtx3060", "NVIDIA GeForce RTX 3060", 65.0),
                GraphicsRecord::new("rtx3070", "NVIDIA GeForce RTX 3070", 75.0),
                GraphicsRecord::new("rtx3080", "NVIDIA GeForce RTX 3080", 85.0),
                GraphicsRecord::new("rtx4070", "NVIDIA GeForce RTX 4070", 90.0),
                GraphicsRecord::new("rtx4080", "NVIDIA GeForce RTX 4080", 96.0),
                GraphicsRecord::new("rtx4090", "NVIDIA GeForce RTX 4090", 100.0),
                GraphicsRecord::new("rx6700xt", "AMD Radeon RX 6700 XT", 72.0),
                GraphicsRecord::new("rx7800xt", "AMD Radeon RX 7800 XT", 88.0),
                GraphicsRecord::new("rx7900xtx", "AMD Radeon RX 7900 XTX", 97.0),
            ],
            resolutions: vec![
                ResolutionRecord::new("1080p", "1080p (Full HD)", 1.0),
                ResolutionRecord::new("1440p", "1440p (QHD)", 0.85),
                ResolutionRecord::new("2160p", "4K (UHD)", 0.7),
            ],
        }
    }

    pub fn processors(&self) -> &[ProcessorRecord] {
        &self.processors
    }

    pub fn graphics(&self) -> &[GraphicsRecord] {
        &self.graphics
    }

    pub fn resolutions(&self) -> &[ResolutionRecord] {
        &self.resolutions
    }

    /// Look up a processor by identifier
    pub fn processor(&self, id: &str) -> Option<&ProcessorRecord> {
        self.processors.iter().find(|p| p.id == id)
    }

    /// Look up a graphics card by identifier
    pub fn graphics_card(&self, id: &str) -> Option<&GraphicsRecord> {
        self.graphics.iter().find(|g| g.id == id)
    }

    /// Look up a resolution by identifier
    pub fn resolution(&self, id: &str) -> Option<&ResolutionRecord> {
        self.resolutions.iter().find(|r| r.id == id)
    }

    /// Position of an identifier within its collection
    pub fn position(&self, kind: ComponentKind, id: &str) -> Option<usize> {
        match kind {
            ComponentKind::Processor => self.processors.iter().position(|p| p.id == id),
            ComponentKind::Graphics => self.graphics.iter().position(|g| g.id == id),
            ComponentKind::Resolution => self.resolutions.iter().position(|r| r.id == id),
        }
    }

    /// Number of entries in a collection
    pub fn len(&self, kind: ComponentKind) -> usize {
        match kind {
            ComponentKind::Processor => self.processors.len(),
            ComponentKind::Graphics => self.graphics.len(),
            ComponentKind::Resolution => self.resolutions.len(),
        }
    }

    /// `(id, name)` pairs for a collection, in catalog order
    pub fn entries(&self, kind: ComponentKind) -> Vec<(&str, &str)> {
        match kind {
            ComponentKind::Processor => self
                .processors
                .iter()
                .map(|p| (p.id.as_str(), p.name.as_str()))
                .collect(),
            ComponentKind::Graphics => self
                .graphics
                .iter()
                .map(|g| (g.id.as_str(), g.name.as_str()))
                .collect(),
            ComponentKind::Resolution => self
                .resolutions
                .iter()
                .map(|r| (r.id.as_str(), r.name.as_str()))
                .collect(),
        }
    }

    /// Resolve three identifiers, reporting the first miss as `NotFound`.
    pub fn resolve(
        &self,
        processor_id: &str,
        graphics_id: &str,
        resolution_id: &str,
    ) -> Result<Selection<'_>> {
        let processor = self
            .processor(processor_id)
            .ok_or_else(|| BottleneckError::not_found(ComponentKind::Processor, processor_id))?;
        let graphics = self
            .graphics_card(graphics_id)
            .ok_or_else(|| BottleneckError::not_found(ComponentKind::Graphics, graphics_id))?;
        let resolution = self
            .resolution(resolution_id)
            .ok_or_else(|| BottleneckError::not_found(ComponentKind::Resolution, resolution_id))?;

        Ok(Selection {
            processor,
            graphics,
            resolution,
        })
    }

    /// Load a catalog from a JSON file and validate it
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> AnyResult<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog from {:?}", path.as_ref()))?;

        let catalog: Self =
            serde_json::from_str(&content).context("Failed to parse catalog JSON")?;
        catalog
            .validate()
            .with_context(|| format!("Invalid catalog in {:?}", path.as_ref()))?;

        tracing::debug!(
            processors = catalog.processors.len(),
            graphics = catalog.graphics.len(),
            resolutions = catalog.resolutions.len(),
            "Catalog loaded from {:?}",
            path.as_ref()
        );
        Ok(catalog)
    }

    /// Save the catalog to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> AnyResult<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize catalog to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write catalog to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Validate collection contents.
    ///
    /// Every collection must be non-empty with unique, non-blank identifiers
    /// and names. Scores must be finite and non-negative; modifiers finite and
    /// within (0, 1].
    pub fn validate(&self) -> Result<()> {
        check_collection(
            ComponentKind::Processor,
            self.processors.iter().map(|p| (p.id.as_str(), p.name.as_str())),
        )?;
        check_collection(
            ComponentKind::Graphics,
            self.graphics.iter().map(|g| (g.id.as_str(), g.name.as_str())),
        )?;
        check_collection(
            ComponentKind::Resolution,
            self.resolutions.iter().map(|r| (r.id.as_str(), r.name.as_str())),
        )?;

        for p in &self.processors {
            if !valid_score(p.score) {
                return Err(BottleneckError::catalog(format!(
                    "Processor '{}' has score {} outside 0..={}",
                    p.id, p.score, MAX_SCORE
                )));
            }
        }
        for g in &self.graphics {
            if !valid_score(g.score) {
                return Err(BottleneckError::catalog(format!(
                    "Graphics card '{}' has score {} outside 0..={}",
                    g.id, g.score, MAX_SCORE
                )));
            }
        }
        for r in &self.resolutions {
            if !valid_modifier(r.modifier) {
                return Err(BottleneckError::catalog(format!(
                    "Resolution '{}' has modifier {} outside (0, 1]",
                    r.id, r.modifier
                )));
            }
        }

        Ok(())
    }
}

/// Scores are finite and within `0..=MAX_SCORE`
pub(crate) fn valid_score(score: f64) -> bool {
    score.is_finite() && (0.0..=MAX_SCORE).contains(&score)
}

/// Modifiers are finite and within (0, 1]
pub(crate) fn valid_modifier(modifier: f64) -> bool {
    modifier.is_finite() && modifier > 0.0 && modifier <= 1.0
}

fn check_collection<'a>(
    kind: ComponentKind,
    entries: impl Iterator<Item = (&'a str, &'a str)>,
) -> Result<()> {
    let mut seen = HashSet::new();
    for (id, name) in entries {
        if id.trim().is_empty() {
            return Err(BottleneckError::catalog(format!("{} with empty id", kind)));
        }
        if name.trim().is_empty() {
            return Err(BottleneckError::catalog(format!("{} '{}' has an empty name", kind, id)));
        }
        if !seen.insert(id) {
            return Err(BottleneckError::catalog(format!("Duplicate {} id '{}'", kind, id)));
        }
    }
    if seen.is_empty() {
        return Err(BottleneckError::catalog(format!("No {} entries", kind)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_reference_catalog_is_valid() {
        let catalog = Catalog::reference();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.processors().len(), 8);
        assert_eq!(catalog.graphics().len(), 9);
        assert_eq!(catalog.resolutions().len(), 3);
    }

    #[test]
    fn test_lookup_hits_and_misses() {
        let catalog = Catalog::reference();
        assert_eq!(catalog.processor("i9-13900k").map(|p| p.score), Some(100.0));
        assert_eq!(catalog.graphics_card("rtx3060").map(|g| g.score), Some(65.0));
        assert_eq!(catalog.resolution("2160p").map(|r| r.modifier), Some(0.7));
        assert!(catalog.processor("rtx4090").is_none());
        assert!(catalog.graphics_card("").is_none());
    }

    #[test]
    fn test_resolve_reports_missing_collection() {
        let catalog = Catalog::reference();
        let err = catalog.resolve("i5-12400f", "voodoo2", "1080p").unwrap_err();
        match err {
            BottleneckError::NotFound { kind, id } => {
                assert_eq!(kind, ComponentKind::Graphics);
                assert_eq!(id, "voodoo2");
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }

        let err = catalog.resolve("i5-12400f", "rtx3060", "8k").unwrap_err();
        assert!(matches!(
            err,
            BottleneckError::NotFound { kind: ComponentKind::Resolution, .. }
        ));
    }

    #[test]
    fn test_resolve_success() {
        let catalog = Catalog::reference();
        let selection = catalog.resolve("r7-7800x3d", "rx7800xt", "1440p").unwrap();
        assert_eq!(selection.processor.name, "AMD Ryzen 7 7800X3D");
        assert_eq!(selection.graphics.name, "AMD Radeon RX 7800 XT");
        assert_eq!(selection.resolution.modifier, 0.85);
    }

    #[test]
    fn test_position_and_entries() {
        let catalog = Catalog::reference();
        assert_eq!(catalog.position(ComponentKind::Processor, "r5-7600x"), Some(5));
        assert_eq!(catalog.position(ComponentKind::Graphics, "rtx4090"), Some(5));
        assert_eq!(catalog.position(ComponentKind::Resolution, "4k"), None);
        let entries = catalog.entries(ComponentKind::Resolution);
        assert_eq!(entries[2], ("2160p", "4K (UHD)"));
        assert_eq!(catalog.len(ComponentKind::Graphics), 9);
    }

    #[test]
    fn test_validation_duplicate_id() {
        let result = Catalog::new(
            vec![
                ProcessorRecord::new("a", "A", 50.0),
                ProcessorRecord::new("a", "A again", 60.0),
            ],
            vec![GraphicsRecord::new("g", "G", 50.0)],
            vec![ResolutionRecord::new("r", "R", 1.0)],
        );
        assert!(matches!(result, Err(BottleneckError::Catalog(_))));
    }

    #[test]
    fn test_validation_empty_collection() {
        let result = Catalog::new(
            vec![ProcessorRecord::new("a", "A", 50.0)],
            vec![],
            vec![ResolutionRecord::new("r", "R", 1.0)],
        );
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Catalog error: No Graphics card entries");
    }

    #[test]
    fn test_validation_numeric_domains() {
        let negative = Catalog::new(
            vec![ProcessorRecord::new("a", "A", -1.0)],
            vec![GraphicsRecord::new("g", "G", 50.0)],
            vec![ResolutionRecord::new("r", "R", 1.0)],
        );
        assert!(negative.is_err());

        let nan = Catalog::new(
            vec![ProcessorRecord::new("a", "A", 1.0)],
            vec![GraphicsRecord::new("g", "G", f64::NAN)],
            vec![ResolutionRecord::new("r", "R", 1.0)],
        );
        assert!(nan.is_err());

        for modifier in [0.0, -0.5, 1.01, f64::INFINITY] {
            let result = Catalog::new(
                vec![ProcessorRecord::new("a", "A", 1.0)],
                vec![GraphicsRecord::new("g", "G", 1.0)],
                vec![ResolutionRecord::new("r", "R", modifier)],
            );
            assert!(result.is_err(), "modifier {} should be rejected", modifier);
        }

        let zero_scores = Catalog::new(
            vec![ProcessorRecord::new("a", "A", 0.0)],
            vec![GraphicsRecord::new("g", "G", 0.0)],
            vec![ResolutionRecord::new("r", "R", 1.0)],
        );
        assert!(zero_scores.is_ok());
    }

    #[test]
    fn test_validation_score_cap() {
        let at_cap = Catalog::new(
            vec![ProcessorRecord::new("a", "A", MAX_SCORE)],
            vec![GraphicsRecord::new("g", "G", 1.0)],
            vec![ResolutionRecord::new("r", "R", 1.0)],
        );
        assert!(at_cap.is_ok());

        let err = Catalog::new(
            vec![ProcessorRecord::new("a", "A", 1.0)],
            vec![GraphicsRecord::new("huge", "Huge", 1.7e308)],
            vec![ResolutionRecord::new("r", "R", 1.0)],
        )
        .unwrap_err();
        assert!(err.to_string().contains("'huge' has score"));
    }

    #[test]
    fn test_validation_blank_name() {
        let result = Catalog::new(
            vec![ProcessorRecord::new("a", "  ", 10.0)],
            vec![GraphicsRecord::new("g", "G", 10.0)],
            vec![ResolutionRecord::new("r", "R", 1.0)],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let file = NamedTempFile::new().unwrap();
        let catalog = Catalog::reference();
        catalog.save_to_file(file.path()).unwrap();

        let loaded = Catalog::load_from_file(file.path()).unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = Catalog::load_from_file("/nonexistent/catalog.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{{ \"processors\": [").unwrap();
        assert!(Catalog::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_load_rejects_out_of_domain_modifier() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "processors": [{{"id": "c", "name": "CPU", "score": 80}}],
                "graphics": [{{"id": "g", "name": "GPU", "score": 80}}],
                "resolutions": [{{"id": "8k", "name": "8K", "modifier": 1.5}}]
            }}"#
        )
        .unwrap();
        let err = Catalog::load_from_file(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("outside (0, 1]"));
    }
}
