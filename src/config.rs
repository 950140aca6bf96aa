//! Configuration for a color scan.
//!
//! Only behavior switches live here. Calibration thresholds are fixed in
//! [`crate::constants`].
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use hexscan::ScanConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ScanConfig::from_json_file(Path::new("hexscan.json"))?;
//!
//! // Or use defaults
//! let config = ScanConfig::default();
//! # Ok::<(), hexscan::ScanError>(())
//! ```
//!
//! Every field is optional in the JSON form; `{}` yields the defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{color::ShortAlphaPolicy, loader, Result, ScanError};

/// Scan configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Handling of 4-digit `#rgba` tokens
    pub short_alpha: ShortAlphaPolicy,

    /// Run the rebalancing pass after the initial split
    pub rebalance: bool,

    /// Rendering of the result
    pub output: OutputFormat,
}

/// Output format of the CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// CSS custom properties grouped by category
    #[default]
    Css,
    /// Pretty-printed JSON report
    Json,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            short_alpha: ShortAlphaPolicy::Expand,
            rebalance: true,
            output: OutputFormat::Css,
        }
    }
}

impl ScanConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = loader::load_text(path)?;
        Self::from_json_str(&content)
    }

    /// Parse configuration from a JSON string
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| ScanError::config("invalid configuration", e))
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ScanError::config("failed to serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| ScanError::from_io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = ScanConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ScanConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config =
            ScanConfig::from_json_str(r#"{"short_alpha": "passthrough", "output": "json"}"#)
                .unwrap();
        assert_eq!(config.short_alpha, ShortAlphaPolicy::Passthrough);
        assert_eq!(config.output, OutputFormat::Json);
        assert!(config.rebalance);
    }

    #[test]
    fn test_invalid_json() {
        let err = ScanConfig::from_json_str(r#"{"rebalance": "yes"}"#).unwrap_err();
        assert!(matches!(err, ScanError::Config { .. }));
    }

    #[test]
    fn test_json_file_roundtrip() {
        let path = std::env::temp_dir().join(format!("hexscan-config-{}.json", std::process::id()));
        let config = ScanConfig {
            rebalance: false,
            ..ScanConfig::default()
        };

        config.to_json_file(&path).unwrap();
        let loaded = ScanConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }
}
