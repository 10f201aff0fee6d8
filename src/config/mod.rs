//! Configuration for report generation
//!
//! The CLI always runs with [`ReportConfig::default`]. Library callers can load
//! overrides from a JSON file.

mod schema;

pub use schema::{LinkConfig, ReportConfig, ThresholdConfig, DEFAULT_SUBTITLE, DEFAULT_TITLE};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a report config from a JSON file
pub fn load_config(path: &Path) -> Result<ReportConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    ReportConfig::from_json(&content)
        .with_context(|| format!("Invalid JSON in config: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        fs::write(&path, r#"{"title": "Nightly"}"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.title, "Nightly");
        assert_eq!(config.thresholds, ThresholdConfig::default());
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_config(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn test_load_config_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid JSON in config"));
    }
}
