//! k6-report: static HTML reports from k6 JSON summaries
//!
//! Reads a k6 summary export, derives the headline numbers, checks them against
//! fixed thresholds and renders a self-contained HTML page. Everything between
//! reading the input and writing the output is a pure function of the document,
//! the config and the generation timestamp.

pub mod config;
pub mod duration;
pub mod error;
pub mod metrics;
pub mod reporter;
pub mod thresholds;

pub use config::ReportConfig;
pub use duration::format_duration;
pub use error::ReportError;
pub use metrics::{MetricsDocument, ReportValues};
pub use thresholds::{evaluate, RunStatus, ThresholdCheck, ThresholdEvaluation};

use chrono::{DateTime, Utc};
use reporter::HtmlReporter;
use std::fs;
use std::io;
use std::path::Path;

/// A rendered report together with the values it was built from
#[derive(Debug, Clone)]
pub struct Report {
    pub values: ReportValues,
    pub evaluation: ThresholdEvaluation,
    pub html: String,
}

/// Read and parse a summary document
pub fn read_metrics(path: &Path) -> Result<MetricsDocument, ReportError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ReportError::InputNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ReportError::ReadInput {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    MetricsDocument::from_json(&content).map_err(|source| ReportError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Build the report for a document. Never fails; missing metrics read as zero.
pub fn render_report(
    doc: &MetricsDocument,
    config: &ReportConfig,
    generated_at: DateTime<Utc>,
) -> Report {
    let values = doc.report_values();
    let evaluation = evaluate(&values, &config.thresholds);
    let html = HtmlReporter::with_config(config.clone()).report(&values, &evaluation, generated_at);
    Report {
        values,
        evaluation,
        html,
    }
}

/// Write rendered HTML to `path`. Parent directories are not created.
pub fn write_report(path: &Path, html: &str) -> Result<(), ReportError> {
    fs::write(path, html).map_err(|source| ReportError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

/// Read `input`, render it with the current time and write it to `output`
pub fn generate(input: &Path, output: &Path, config: &ReportConfig) -> Result<Report, ReportError> {
    let doc = read_metrics(input)?;
    let report = render_report(&doc, config, Utc::now());
    write_report(output, &report.html)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    const SUMMARY: &str = r#"{
        "metrics": {
            "http_reqs": {"values": {"count": 500}},
            "http_req_duration": {"values": {"avg": 80, "p(95)": 250, "max": 900}},
            "http_req_failed": {"values": {"rate": 0.15}},
            "vus_max": {"values": {"value": 20}}
        }
    }"#;

    #[test]
    fn test_render_report_status() {
        let doc = MetricsDocument::from_json(SUMMARY).unwrap();
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let report = render_report(&doc, &ReportConfig::default(), at);
        assert_eq!(report.evaluation.status, RunStatus::Warning);
        assert_eq!(report.values.request_count(), 500);
        assert!(report.html.contains("⚠️ WARNING"));
        assert!(report.html.contains("2026-01-02 03:04:05 UTC"));
    }

    #[test]
    fn test_generate_writes_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("results.json");
        let output = dir.path().join("report.html");
        fs::write(&input, SUMMARY).unwrap();

        let report = generate(&input, &output, &ReportConfig::default()).unwrap();
        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(written, report.html);
    }

    #[test]
    fn test_missing_input_is_not_found() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("report.html");
        let err = generate(&dir.path().join("missing.json"), &output, &ReportConfig::default())
            .unwrap_err();
        assert!(matches!(err, ReportError::InputNotFound { .. }));
        assert!(err.is_input_error());
        assert!(!output.exists());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("results.json");
        let output = dir.path().join("report.html");
        fs::write(&input, "{ truncated").unwrap();

        let err = generate(&input, &output, &ReportConfig::default()).unwrap_err();
        assert!(matches!(err, ReportError::ParseInput { .. }));
        assert!(err.to_string().starts_with("Error reading JSON"));
        assert!(!output.exists());
    }

    #[test]
    fn test_unwritable_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("results.json");
        fs::write(&input, SUMMARY).unwrap();
        let output = dir.path().join("no-such-dir").join("report.html");

        let err = generate(&input, &output, &ReportConfig::default()).unwrap_err();
        assert!(matches!(err, ReportError::WriteOutput { .. }));
        assert!(!err.is_input_error());
        assert!(err.to_string().starts_with("Error writing HTML"));
    }
}
