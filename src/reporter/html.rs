//! HTML reporter: renders a self-contained static report page
//!
//! All styling is inline. The only links are relative: the raw results, the
//! console capture and the reports hub. None of them is checked.

use crate::config::ReportConfig;
use crate::duration::format_duration;
use crate::metrics::ReportValues;
use crate::thresholds::{ThresholdCheck, ThresholdEvaluation};
use chrono::{DateTime, Utc};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Escapes text for HTML element content and quoted attribute values
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Display strings for the summary tiles
struct SummaryView {
    total_requests: String,
    avg_duration: String,
    p95_duration: String,
    max_duration: String,
    vus_max: String,
    failed_rate: String,
}

impl SummaryView {
    fn new(values: &ReportValues) -> Self {
        Self {
            total_requests: values.request_count().to_string(),
            avg_duration: format_duration(values.avg_duration),
            p95_duration: format_duration(values.p95_duration),
            max_duration: format_duration(values.max_duration),
            vus_max: values.vus_count().to_string(),
            failed_rate: format!("{:.2}%", values.failed_rate),
        }
    }

    fn tiles(&self) -> [(&'static str, &str); 6] {
        [
            ("Total Requests", self.total_requests.as_str()),
            ("Avg Response Time", self.avg_duration.as_str()),
            ("P95 Response Time", self.p95_duration.as_str()),
            ("Max Response Time", self.max_duration.as_str()),
            ("Max VUs", self.vus_max.as_str()),
            ("Failed Requests", self.failed_rate.as_str()),
        ]
    }
}

/// Reporter that generates the static HTML page
pub struct HtmlReporter {
    config: ReportConfig,
}

impl HtmlReporter {
    pub fn new() -> Self {
        Self::with_config(ReportConfig::default())
    }

    pub fn with_config(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Generate the full HTML report
    pub fn report(
        &self,
        values: &ReportValues,
        evaluation: &ThresholdEvaluation,
        generated_at: DateTime<Utc>,
    ) -> String {
        let title = escape_html(&self.config.title);

        let mut html = String::with_capacity(8_192);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("    <meta charset=\"UTF-8\">\n");
        html.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str(&format!("    <title>{}</title>\n", title));
        html.push_str(Self::template_style());
        html.push_str("</head>\n<body>\n    <div class=\"container\">\n");
        html.push_str(&self.render_header(&title, generated_at));
        html.push_str(&self.render_summary(values, evaluation));
        html.push_str(&self.render_thresholds(&evaluation.checks));
        html.push_str(&self.render_footer());
        html.push_str("    </div>\n</body>\n</html>");
        html
    }

    fn render_header(&self, title: &str, generated_at: DateTime<Utc>) -> String {
        format!(
            r#"        <div class="header">
            <h1>🚀 {title}</h1>
            <p>{subtitle}</p>
            <p style="opacity: 0.8; margin-top: 10px;">Generated: {timestamp}</p>
        </div>

"#,
            title = title,
            subtitle = escape_html(&self.config.subtitle),
            timestamp = generated_at.format(TIMESTAMP_FORMAT),
        )
    }

    fn render_summary(&self, values: &ReportValues, evaluation: &ThresholdEvaluation) -> String {
        let view = SummaryView::new(values);
        let mut out = String::from(
            "        <div class=\"card\">\n            <h2>📊 Summary</h2>\n            <div class=\"metric-grid\">\n",
        );
        for (label, value) in view.tiles() {
            out.push_str(&format!(
                r#"                <div class="metric-card">
                    <div class="metric-label">{}</div>
                    <div class="metric-value">{}</div>
                </div>
"#,
                label, value
            ));
        }
        let status = evaluation.status;
        out.push_str(&format!(
            r#"            </div>
            <div style="text-align: center; margin-top: 20px;">
                <span class='status-badge {}'>{} {}</span>
            </div>
        </div>

"#,
            status.css_class(),
            status.icon(),
            status.label()
        ));
        out
    }

    fn render_thresholds(&self, checks: &[ThresholdCheck]) -> String {
        let mut out = String::from(
            r#"        <div class="card">
            <h2>🎯 Thresholds</h2>
            <table>
                <thead>
                    <tr>
                        <th>Metric</th>
                        <th>Threshold</th>
                        <th>Actual</th>
                        <th>Status</th>
                    </tr>
                </thead>
                <tbody>
"#,
        );
        for check in checks {
            let verdict = if check.passed { "✅ Pass" } else { "❌ Fail" };
            out.push_str(&format!(
                r#"                    <tr>
                        <td>{}</td>
                        <td>{}</td>
                        <td>{}</td>
                        <td>{}</td>
                    </tr>
"#,
                check.metric,
                escape_html(&check.threshold),
                escape_html(&check.actual),
                verdict
            ));
        }
        out.push_str("                </tbody>\n            </table>\n        </div>\n\n");
        out
    }

    fn render_footer(&self) -> String {
        let links = &self.config.links;
        format!(
            r#"        <div class="card">
            <h2>📥 Raw Data</h2>
            <p>Download the complete JSON results for detailed analysis:</p>
            <a href="{results}" download class="back-link" style="margin-top: 10px;">Download JSON Results</a>
            <a href="{console}" download class="back-link" style="margin-top: 10px; margin-left: 10px;">View Console Output</a>
        </div>

        <div style="text-align: center;">
            <a href="{hub}" class="back-link">← Back to Reports Hub</a>
        </div>
"#,
            results = escape_html(&links.results_json),
            console = escape_html(&links.console_output),
            hub = escape_html(&links.reports_hub),
        )
    }

    // ─── HTML template pieces ────────────────────────────────────────────

    fn template_style() -> &'static str {
        r##"    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            padding: 40px 20px;
        }
        .container { max-width: 1200px; margin: 0 auto; }
        .header {
            text-align: center;
            color: white;
            margin-bottom: 40px;
        }
        .header h1 { font-size: 2.5rem; margin-bottom: 10px; }
        .card {
            background: white;
            border-radius: 15px;
            padding: 30px;
            margin-bottom: 20px;
            box-shadow: 0 10px 30px rgba(0,0,0,0.2);
        }
        .metric-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
            gap: 20px;
            margin-top: 20px;
        }
        .metric-card {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 25px;
            border-radius: 10px;
            text-align: center;
        }
        .metric-value {
            font-size: 2.5rem;
            font-weight: bold;
            margin: 10px 0;
        }
        .metric-label {
            font-size: 0.9rem;
            opacity: 0.9;
            text-transform: uppercase;
            letter-spacing: 1px;
        }
        .status-badge {
            display: inline-block;
            padding: 8px 16px;
            border-radius: 20px;
            font-weight: 600;
            margin-top: 10px;
        }
        .status-success { background: #48bb78; color: white; }
        .status-warning { background: #ed8936; color: white; }
        .status-error { background: #f56565; color: white; }
        .back-link {
            display: inline-block;
            margin-top: 20px;
            padding: 12px 24px;
            background: white;
            color: #2d3748;
            text-decoration: none;
            border-radius: 8px;
            font-weight: 600;
            transition: transform 0.2s;
        }
        .back-link:hover { transform: scale(1.05); }
        table {
            width: 100%;
            border-collapse: collapse;
            margin-top: 20px;
        }
        th, td {
            padding: 12px;
            text-align: left;
            border-bottom: 1px solid #e2e8f0;
        }
        th {
            background: #f7fafc;
            font-weight: 600;
            color: #2d3748;
        }
    </style>
"##
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}
