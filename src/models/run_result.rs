//! Run result models for batch test orchestration
//!
//! Defines project entries, outcome classification, and run summaries.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a sub-project, naming a directory under the orchestration root
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectEntry(String);

impl ProjectEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Directory name of the sub-project
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProjectEntry {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ProjectEntry {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for ProjectEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classification of a single test invocation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Test command ran and exited zero
    Success,
    /// Test command ran and exited non-zero
    TestFailure,
    /// Test command could not be started at all
    LaunchError,
}

impl Outcome {
    pub fn symbol(&self) -> &'static str {
        match self {
            Outcome::Success => "✓",
            Outcome::TestFailure => "✗",
            Outcome::LaunchError => "!",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => write!(f, "PASS"),
            Outcome::TestFailure => write!(f, "FAIL"),
            Outcome::LaunchError => write!(f, "LAUNCH ERROR"),
        }
    }
}

/// Result of one test invocation for one project
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunResult {
    pub project: ProjectEntry,
    pub outcome: Outcome,
    /// Raw process exit code, when the process ran and reported one
    pub exit_code: Option<i32>,
    pub duration_ms: u64,
    pub message: Option<String>,
}

impl RunResult {
    pub fn success(project: ProjectEntry, duration_ms: u64) -> Self {
        Self {
            project,
            outcome: Outcome::Success,
            exit_code: Some(0),
            duration_ms,
            message: None,
        }
    }

    pub fn test_failure(project: ProjectEntry, exit_code: Option<i32>, duration_ms: u64) -> Self {
        Self {
            project,
            outcome: Outcome::TestFailure,
            exit_code,
            duration_ms,
            message: None,
        }
    }

    pub fn launch_error(project: ProjectEntry, error: impl Into<String>) -> Self {
        Self {
            project,
            outcome: Outcome::LaunchError,
            exit_code: None,
            duration_ms: 0,
            message: Some(error.into()),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} [{}ms]",
            self.outcome.symbol(),
            self.project,
            self.outcome,
            self.duration_ms
        )?;
        if let Some(code) = self.exit_code {
            if code != 0 {
                write!(f, " (exit code {code})")?;
            }
        }
        if let Some(msg) = &self.message {
            write!(f, " - {msg}")?;
        }
        Ok(())
    }
}

/// Summary of a full orchestration run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub launch_errors: usize,
    pub total_duration_ms: u64,
    /// Per-project results, in configured order
    pub results: Vec<RunResult>,
}

impl RunSummary {
    pub fn new(results: Vec<RunResult>) -> Self {
        let total = results.len();
        let passed = results
            .iter()
            .filter(|r| r.outcome == Outcome::Success)
            .count();
        let failed = results
            .iter()
            .filter(|r| r.outcome == Outcome::TestFailure)
            .count();
        let launch_errors = results
            .iter()
            .filter(|r| r.outcome == Outcome::LaunchError)
            .count();
        let total_duration_ms = results.iter().map(|r| r.duration_ms).sum();

        Self {
            total,
            passed,
            failed,
            launch_errors,
            total_duration_ms,
            results,
        }
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    pub fn is_all_passed(&self) -> bool {
        self.passed == self.total
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.results {
            writeln!(f, "  {result}")?;
        }
        writeln!(
            f,
            "Total: {} | Pass: {} | Fail: {} | Launch errors: {}",
            self.total, self.passed, self.failed, self.launch_errors
        )?;
        write!(
            f,
            "Pass Rate: {:.1}% | Duration: {}ms",
            self.pass_rate(),
            self.total_duration_ms
        )
    }
}
