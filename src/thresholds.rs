//! Threshold evaluation: overall run status and per-metric checks

use crate::config::ThresholdConfig;
use crate::duration::format_duration;
use crate::metrics::ReportValues;
use std::fmt;

/// Overall outcome of a load test run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Passed,
    Warning,
    Failed,
}

impl RunStatus {
    /// Classify a run. Error rate decides between WARNING and FAILED
    /// regardless of latency.
    pub fn classify(values: &ReportValues, limits: &ThresholdConfig) -> Self {
        if values.failed_rate < limits.error_rate_pass_pct
            && values.p95_duration < limits.p95_max_ms
        {
            RunStatus::Passed
        } else if values.failed_rate < limits.error_rate_warn_pct {
            RunStatus::Warning
        } else {
            RunStatus::Failed
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RunStatus::Passed => "PASSED",
            RunStatus::Warning => "WARNING",
            RunStatus::Failed => "FAILED",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            RunStatus::Passed => "✅",
            RunStatus::Warning => "⚠️",
            RunStatus::Failed => "❌",
        }
    }

    /// CSS modifier used by the status badge
    pub fn css_class(self) -> &'static str {
        match self {
            RunStatus::Passed => "status-success",
            RunStatus::Warning => "status-warning",
            RunStatus::Failed => "status-error",
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One row of the thresholds table
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdCheck {
    pub metric: &'static str,
    /// Condition as plain text, e.g. `< 2000ms`
    pub threshold: String,
    /// Observed value, already formatted for display
    pub actual: String,
    pub passed: bool,
}

/// Status badge plus the thresholds table
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdEvaluation {
    pub status: RunStatus,
    pub checks: Vec<ThresholdCheck>,
}

impl ThresholdEvaluation {
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }
}

/// Evaluate every threshold against the derived values
pub fn evaluate(values: &ReportValues, limits: &ThresholdConfig) -> ThresholdEvaluation {
    let checks = vec![
        ThresholdCheck {
            metric: "P95 Response Time",
            threshold: format!("< {}ms", limits.p95_max_ms),
            actual: format_duration(values.p95_duration),
            passed: values.p95_duration < limits.p95_max_ms,
        },
        ThresholdCheck {
            metric: "Error Rate",
            threshold: format!("< {}%", limits.error_rate_pass_pct),
            actual: format!("{:.2}%", values.failed_rate),
            passed: values.failed_rate < limits.error_rate_pass_pct,
        },
        ThresholdCheck {
            metric: "Total Requests",
            threshold: "> 0".to_string(),
            actual: values.request_count().to_string(),
            passed: values.http_reqs > 0.0,
        },
    ];

    ThresholdEvaluation {
        status: RunStatus::classify(values, limits),
        checks,
    }
}
