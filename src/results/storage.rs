//! Run storage and retrieval
//!
//! Provides persistent storage for run results in JSON format.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::models::RunSummary;

/// A completed orchestration run, as persisted to disk
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoredRun {
    /// Unique run ID, derived from the start timestamp
    pub id: String,

    /// Root directory the run was orchestrated from
    pub root: PathBuf,

    /// Command line invoked per project
    pub command: String,

    /// Timestamp when the run started
    pub started_at: DateTime<Utc>,

    /// Timestamp when the run completed
    pub completed_at: DateTime<Utc>,

    /// Per-project results and counts
    pub summary: RunSummary,
}

impl StoredRun {
    /// Record a completed run
    pub fn new(
        root: impl Into<PathBuf>,
        command: impl Into<String>,
        started_at: DateTime<Utc>,
        summary: RunSummary,
    ) -> Self {
        Self {
            id: format!("run-{}", started_at.format("%Y%m%d-%H%M%S")),
            root: root.into(),
            command: command.into(),
            started_at,
            completed_at: Utc::now(),
            summary,
        }
    }

    /// Save the run as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref()).with_context(|| {
            format!("Failed to create results file {}", path.as_ref().display())
        })?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self).context("Failed to serialize run")?;

        info!("Saved results to {}", path.as_ref().display());
        Ok(())
    }

    /// Load a previously saved run
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref()).with_context(|| {
            format!("Failed to open results file {}", path.as_ref().display())
        })?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).context("Failed to parse results file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RunResult;

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");

        let summary = RunSummary::new(vec![
            RunResult::success("rc".into(), 100),
            RunResult::test_failure("rrc".into(), Some(1), 40),
        ]);
        let run = StoredRun::new("/work/repo", "cargo test", Utc::now(), summary);
        run.save(&path).unwrap();

        let loaded = StoredRun::load(&path).unwrap();
        assert_eq!(loaded.id, run.id);
        assert_eq!(loaded.summary.total, 2);
        assert_eq!(loaded.summary.passed, 1);
        assert_eq!(loaded.command, "cargo test");
    }

    #[test]
    fn id_is_timestamp_derived() {
        let started = "2024-05-01T12:30:45Z".parse::<DateTime<Utc>>().unwrap();
        let run = StoredRun::new(".", "cargo test", started, RunSummary::new(Vec::new()));
        assert_eq!(run.id, "run-20240501-123045");
    }
}
