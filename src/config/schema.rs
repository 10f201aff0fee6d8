//! Config schema and deserialization

use serde::Deserialize;

pub const DEFAULT_TITLE: &str = "K6 Performance Test Report";
pub const DEFAULT_SUBTITLE: &str = "Load Testing Results for Trading Simulator";

/// Limits used for the status badge and the thresholds table
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThresholdConfig {
    /// P95 response time must stay below this (ms)
    pub p95_max_ms: f64,
    /// Error rate below this percentage passes
    pub error_rate_pass_pct: f64,
    /// Error rate below this percentage (but not passing) is a warning
    pub error_rate_warn_pct: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            p95_max_ms: 2000.0,
            error_rate_pass_pct: 10.0,
            error_rate_warn_pct: 20.0,
        }
    }
}

/// Relative links emitted in the report footer
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkConfig {
    /// Raw JSON results, offered as a download
    pub results_json: String,
    /// Captured console output, offered as a download
    pub console_output: String,
    /// Back link to the reports hub
    pub reports_hub: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            results_json: "results.json".to_string(),
            console_output: "console-output.txt".to_string(),
            reports_hub: "../".to_string(),
        }
    }
}

/// Report configuration. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportConfig {
    pub title: String,
    pub subtitle: String,
    pub thresholds: ThresholdConfig,
    pub links: LinkConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
            thresholds: ThresholdConfig::default(),
            links: LinkConfig::default(),
        }
    }
}

impl ReportConfig {
    /// Parse a config from JSON; omitted fields keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
