//! Console reporter with colored status lines

use crate::thresholds::{RunStatus, ThresholdEvaluation};
use colored::Colorize;
use std::fmt::Display;
use std::path::Path;

pub const USAGE: &str = "Usage: k6-report <input.json> <output.html>";

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Banner and the paths being processed
    pub fn start(&self, input: &Path, output: &Path) {
        println!("{}", self.banner_line());
        println!("📁 Input: {}", input.display());
        println!("📄 Output: {}", output.display());
    }

    /// Confirmation after the report was written
    pub fn generated(&self, output: &Path, bytes: usize, evaluation: &ThresholdEvaluation) {
        println!("{}", self.status_line(evaluation));
        println!("{}", self.generated_line(output, bytes));
    }

    /// Glyph-prefixed diagnostic on stderr
    pub fn error(&self, message: impl Display) {
        eprintln!("{}", self.error_line(message));
    }

    pub fn usage(&self) {
        self.error(USAGE);
    }

    fn banner_line(&self) -> String {
        let text = "📊 K6 HTML Report Generator";
        if self.use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn status_line(&self, evaluation: &ThresholdEvaluation) -> String {
        let status = evaluation.status;
        let label = if self.use_colors {
            match status {
                RunStatus::Passed => status.label().green().bold().to_string(),
                RunStatus::Warning => status.label().yellow().bold().to_string(),
                RunStatus::Failed => status.label().red().bold().to_string(),
            }
        } else {
            status.label().to_string()
        };
        let passed = evaluation.checks.iter().filter(|c| c.passed).count();
        format!(
            "{} Status: {} ({}/{} thresholds passed)",
            status.icon(),
            label,
            passed,
            evaluation.checks.len()
        )
    }

    fn generated_line(&self, output: &Path, bytes: usize) -> String {
        format!(
            "✅ HTML report generated: {} ({:.2} KB)",
            output.display(),
            bytes as f64 / 1024.0
        )
    }

    fn error_line(&self, message: impl Display) -> String {
        if self.use_colors {
            format!("❌ {}", message).red().to_string()
        } else {
            format!("❌ {}", message)
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThresholdConfig;
    use crate::metrics::ReportValues;
    use crate::thresholds::evaluate;

    fn plain() -> ConsoleReporter {
        ConsoleReporter::new().without_colors()
    }

    #[test]
    fn test_generated_line_reports_size() {
        let line = plain().generated_line(Path::new("out/report.html"), 2048);
        assert_eq!(line, "✅ HTML report generated: out/report.html (2.00 KB)");
    }

    #[test]
    fn test_error_line_has_glyph() {
        let line = plain().error_line("Error reading JSON: boom");
        assert_eq!(line, "❌ Error reading JSON: boom");
    }

    #[test]
    fn test_status_line_counts_checks() {
        let values = ReportValues {
            http_reqs: 0.0,
            ..ReportValues::default()
        };
        let eval = evaluate(&values, &ThresholdConfig::default());
        let line = plain().status_line(&eval);
        assert_eq!(line, "✅ Status: PASSED (2/3 thresholds passed)");
    }

    #[test]
    fn test_banner_plain() {
        assert_eq!(plain().banner_line(), "📊 K6 HTML Report Generator");
    }
}
