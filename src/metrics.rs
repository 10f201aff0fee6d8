//! Metrics document model and extraction of the values shown in the report
//!
//! The input is a k6 summary export: a `metrics` object keyed by metric name,
//! each metric carrying a `values` object of numeric fields. Every lookup is
//! total; a missing metric, missing field or non-numeric field reads as zero.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

pub const HTTP_REQS: &str = "http_reqs";
pub const HTTP_REQ_DURATION: &str = "http_req_duration";
pub const HTTP_REQ_FAILED: &str = "http_req_failed";
pub const VUS_MAX: &str = "vus_max";
pub const ITERATIONS: &str = "iterations";

/// Parsed k6 summary document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetricsDocument {
    #[serde(default)]
    pub metrics: BTreeMap<String, Metric>,
}

/// A single k6 metric; only its `values` are read
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Metric {
    #[serde(default)]
    pub values: BTreeMap<String, Value>,
}

impl Metric {
    /// Numeric field of this metric, zero when absent or not a number
    pub fn value(&self, field: &str) -> f64 {
        self.values.get(field).and_then(Value::as_f64).unwrap_or(0.0)
    }
}

impl MetricsDocument {
    /// Parse a summary document from JSON text
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// `metrics.<metric>.values.<field>`, zero when any step is missing
    pub fn value(&self, metric: &str, field: &str) -> f64 {
        self.metrics
            .get(metric)
            .map(|m| m.value(field))
            .unwrap_or(0.0)
    }

    /// Extract the derived values shown in the report
    pub fn report_values(&self) -> ReportValues {
        ReportValues::from_document(self)
    }
}

/// Values derived from the summary document
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReportValues {
    /// Total HTTP requests issued
    pub http_reqs: f64,
    /// Mean request duration (ms)
    pub avg_duration: f64,
    /// 95th percentile request duration (ms)
    pub p95_duration: f64,
    /// Slowest request duration (ms)
    pub max_duration: f64,
    /// Failed requests as a percentage (0-100)
    pub failed_rate: f64,
    /// Peak concurrent virtual users
    pub vus_max: f64,
    /// Completed iterations. Not rendered by the current template.
    pub iterations: f64,
}

impl ReportValues {
    pub fn from_document(doc: &MetricsDocument) -> Self {
        Self {
            http_reqs: doc.value(HTTP_REQS, "count"),
            avg_duration: doc.value(HTTP_REQ_DURATION, "avg"),
            p95_duration: doc.value(HTTP_REQ_DURATION, "p(95)"),
            max_duration: doc.value(HTTP_REQ_DURATION, "max"),
            failed_rate: doc.value(HTTP_REQ_FAILED, "rate") * 100.0,
            vus_max: doc.value(VUS_MAX, "value"),
            iterations: doc.value(ITERATIONS, "count"),
        }
    }

    /// Request count as displayed (fraction truncated)
    pub fn request_count(&self) -> i64 {
        self.http_reqs.trunc() as i64
    }

    /// Peak VUs as displayed (fraction truncated)
    pub fn vus_count(&self) -> i64 {
        self.vus_max.trunc() as i64
    }
}
