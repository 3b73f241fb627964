//! Application configuration
//!
//! Settings are loaded from an optional JSON file (`--config`). Every field has
//! a default, so a partial file only overrides what it names:
//!
//! ```json
//! {
//!   "catalog_path": "my-catalog.json",
//!   "default_processor": "r5-7600x",
//!   "default_graphics": "rtx4090",
//!   "default_resolution": "1080p",
//!   "log_file": "/tmp/bottleneck-solver.log",
//!   "explanation": { "enabled": true, "model": "gemini-2.5-flash" }
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;

/// Default Gemini API root
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default text-generation model
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Settings for the explanation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplanationConfig {
    pub enabled: bool,
    pub model: String,
    pub endpoint: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    pub timeout_secs: u64,
}

impl Default for ExplanationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key_env: "API_KEY".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Top-level application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Catalog file replacing the built-in reference data
    pub catalog_path: Option<PathBuf>,
    pub default_processor: String,
    pub default_graphics: String,
    pub default_resolution: String,
    /// Log destination in TUI mode (logging is off there otherwise)
    pub log_file: Option<PathBuf>,
    pub explanation: ExplanationConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_processor: "r5-7600x".to_string(),
            default_graphics: "rtx4090".to_string(),
            default_resolution: "1080p".to_string(),
            log_file: None,
            explanation: ExplanationConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.default_processor.trim().is_empty() {
            anyhow::bail!("Default processor must be specified");
        }
        if self.default_graphics.trim().is_empty() {
            anyhow::bail!("Default graphics card must be specified");
        }
        if self.default_resolution.trim().is_empty() {
            anyhow::bail!("Default resolution must be specified");
        }

        let explanation = &self.explanation;
        if explanation.enabled {
            if explanation.model.trim().is_empty() {
                anyhow::bail!("Explanation model must be specified");
            }
            let endpoint = explanation.endpoint.trim();
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                anyhow::bail!("Explanation endpoint must start with http:// or https://");
            }
            if explanation.api_key_env.trim().is_empty() {
                anyhow::bail!("Explanation API key variable must be specified");
            }
            if explanation.timeout_secs == 0 {
                anyhow::bail!("Explanation timeout must be at least 1 second");
            }
        }

        Ok(())
    }

    /// Build the catalog these settings point at.
    ///
    /// `override_path` (the `--catalog` flag) wins over `catalog_path`.
    pub fn load_catalog(&self, override_path: Option<&Path>) -> Result<Catalog> {
        match override_path.or(self.catalog_path.as_deref()) {
            Some(path) => {
                tracing::info!("Loading catalog from {:?}", path);
                Catalog::load_from_file(path)
            }
            None => Ok(Catalog::reference()),
        }
    }
}
