//! Output formatters for run results
//!
//! Provides JSON, Table, and summary output formats.

#![allow(dead_code)]

use crate::models::{Outcome, RunResult, RunSummary};

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    JsonPretty,
    Summary,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "json-pretty" | "jsonpretty" => Some(OutputFormat::JsonPretty),
            "summary" => Some(OutputFormat::Summary),
            _ => None,
        }
    }
}

/// Result formatter
pub struct ResultFormatter {
    format: OutputFormat,
    colorize: bool,
}

impl ResultFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            colorize: true,
        }
    }

    pub fn no_color(mut self) -> Self {
        self.colorize = false;
        self
    }

    /// Format a single run result
    pub fn format_result(&self, result: &RunResult) -> String {
        match self.format {
            OutputFormat::Table => self.format_result_table(result),
            OutputFormat::Json => serde_json::to_string(result).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(result).unwrap_or_default(),
            OutputFormat::Summary => self.format_result_summary(result),
        }
    }

    fn status_str(&self, outcome: Outcome) -> String {
        if self.colorize {
            match outcome {
                Outcome::Success => "\x1b[32m✓ PASS\x1b[0m".to_string(),
                Outcome::TestFailure => "\x1b[31m✗ FAIL\x1b[0m".to_string(),
                Outcome::LaunchError => "\x1b[31m! LAUNCH ERROR\x1b[0m".to_string(),
            }
        } else {
            format!("{} {}", outcome.symbol(), outcome)
        }
    }

    fn format_result_table(&self, result: &RunResult) -> String {
        let mut line = format!(
            "{:24} {} [{:>6}ms]",
            result.project.name(),
            self.status_str(result.outcome),
            result.duration_ms
        );
        if let Some(msg) = &result.message {
            line.push_str(&format!(" - {msg}"));
        }
        line
    }

    fn format_result_summary(&self, result: &RunResult) -> String {
        format!(
            "{} {} ({}ms)",
            result.outcome.symbol(),
            result.project,
            result.duration_ms
        )
    }

    /// Format a run summary
    pub fn format_summary(&self, summary: &RunSummary) -> String {
        match self.format {
            OutputFormat::Table => self.format_summary_table(summary),
            OutputFormat::Json => serde_json::to_string(summary).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(summary).unwrap_or_default(),
            OutputFormat::Summary => self.format_summary_brief(summary),
        }
    }

    fn format_summary_table(&self, summary: &RunSummary) -> String {
        let mut output = String::new();

        output.push_str("\n══════════════════════════════════════════════════════════════\n");
        output.push_str("  Batch Test Results\n");
        output.push_str("──────────────────────────────────────────────────────────────\n");

        for result in &summary.results {
            output.push_str(&format!("  {}\n", self.format_result_table(result)));
        }

        output.push_str("──────────────────────────────────────────────────────────────\n");

        let pass_str = if self.colorize {
            format!("\x1b[32m{}\x1b[0m", summary.passed)
        } else {
            summary.passed.to_string()
        };
        let fail_str = if self.colorize && summary.failed > 0 {
            format!("\x1b[31m{}\x1b[0m", summary.failed)
        } else {
            summary.failed.to_string()
        };
        let launch_str = if self.colorize && summary.launch_errors > 0 {
            format!("\x1b[31m{}\x1b[0m", summary.launch_errors)
        } else {
            summary.launch_errors.to_string()
        };

        output.push_str(&format!(
            "  Total: {} | Pass: {} | Fail: {} | Launch errors: {}\n",
            summary.total, pass_str, fail_str, launch_str
        ));
        output.push_str(&format!(
            "  Pass Rate: {:5.1}% | Duration: {}ms\n",
            summary.pass_rate(),
            summary.total_duration_ms
        ));
        output.push_str("══════════════════════════════════════════════════════════════\n");

        output
    }

    fn format_summary_brief(&self, summary: &RunSummary) -> String {
        format!(
            "{}/{} passed ({:.1}%) in {}ms",
            summary.passed,
            summary.total,
            summary.pass_rate(),
            summary.total_duration_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> RunSummary {
        RunSummary::new(vec![
            RunResult::success("rc".into(), 120),
            RunResult::test_failure("rrc".into(), Some(101), 80),
            RunResult::launch_error("missing".into(), "no such directory"),
        ])
    }

    #[test]
    fn format_from_str() {
        assert_eq!(OutputFormat::from_str("table"), Some(OutputFormat::Table));
        assert_eq!(OutputFormat::from_str("JSON"), Some(OutputFormat::Json));
        assert_eq!(
            OutputFormat::from_str("json-pretty"),
            Some(OutputFormat::JsonPretty)
        );
        assert_eq!(OutputFormat::from_str("bogus"), None);
    }

    #[test]
    fn table_distinguishes_outcomes() {
        let formatter = ResultFormatter::new(OutputFormat::Table).no_color();
        let rendered = formatter.format_summary(&sample_summary());
        assert!(rendered.contains("✓ PASS"));
        assert!(rendered.contains("✗ FAIL"));
        assert!(rendered.contains("! LAUNCH ERROR"));
        assert!(rendered.contains("Pass Rate:"));
    }

    #[test]
    fn json_summary_is_parseable() {
        let formatter = ResultFormatter::new(OutputFormat::Json);
        let rendered = formatter.format_summary(&sample_summary());
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["total"], 3);
        assert_eq!(value["results"][0]["project"], "rc");
        assert_eq!(value["results"][2]["outcome"], "launch_error");
    }

    #[test]
    fn brief_summary() {
        let formatter = ResultFormatter::new(OutputFormat::Summary);
        let rendered = formatter.format_summary(&sample_summary());
        assert!(rendered.starts_with("1/3 passed"));
    }
}
