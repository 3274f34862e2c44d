//! Suite execution runner
//!
//! Manages sequential execution of each sub-project's native test command.

use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Instant;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::config::{AppConfig, TestCommand};
use crate::models::{ProjectEntry, RunResult, RunSummary};

/// The test command never produced an exit status.
///
/// Covers everything from a missing project directory to a missing executable:
/// any failure prior to obtaining an exit status.
#[derive(Debug, Error)]
#[error("failed to launch `{command}` in {}: {source}", dir.display())]
pub struct InvocationError {
    command: String,
    dir: PathBuf,
    #[source]
    source: std::io::Error,
}

/// Runner for sub-project test suites
pub struct SuiteRunner {
    root: PathBuf,
    src_dir: String,
    command: TestCommand,
}

impl SuiteRunner {
    /// Create a new suite runner from application configuration
    pub fn new(config: &AppConfig) -> Self {
        Self {
            root: config.root.clone(),
            src_dir: config.src_dir.clone(),
            command: config.command.clone(),
        }
    }

    /// Directory the test command runs from for a given project
    pub fn test_dir(&self, project: &ProjectEntry) -> PathBuf {
        self.root.join(project.name()).join(&self.src_dir)
    }

    /// Command line invoked per project
    pub fn command(&self) -> &TestCommand {
        &self.command
    }

    /// Spawn the test command for one project and wait for its exit status.
    ///
    /// The working directory is set on the child only; the orchestrator's own
    /// working directory is never changed. Project directories are not
    /// validated up front; a missing directory surfaces here as an error.
    async fn invoke(&self, project: &ProjectEntry) -> Result<ExitStatus, InvocationError> {
        let dir = self.test_dir(project);
        debug!("Invoking `{}` in {}", self.command, dir.display());

        Command::new(&self.command.program)
            .args(&self.command.args)
            .current_dir(&dir)
            .status()
            .await
            .map_err(|source| InvocationError {
                command: self.command.to_string(),
                dir,
                source,
            })
    }

    /// Run one project's test suite and classify the outcome.
    ///
    /// Never returns an error: a launch failure is a classified result, not a
    /// propagated one.
    pub async fn run_project(&self, project: &ProjectEntry) -> RunResult {
        let start = Instant::now();

        match self.invoke(project).await {
            Ok(status) if status.success() => {
                RunResult::success(project.clone(), elapsed_ms(start))
            }
            Ok(status) => {
                debug!("Tests for {project} exited with {status}");
                RunResult::test_failure(project.clone(), status.code(), elapsed_ms(start))
            }
            Err(e) => {
                warn!("Could not launch tests for {project}: {e}");
                RunResult::launch_error(project.clone(), e.to_string())
            }
        }
    }

    /// Run all projects sequentially, in input order.
    ///
    /// Produces exactly one result per project; a failing or unlaunchable
    /// project never blocks the ones after it. An empty list spawns nothing
    /// and reports nothing.
    pub async fn run_all(&self, projects: &[ProjectEntry]) -> RunSummary {
        if projects.is_empty() {
            return RunSummary::new(Vec::new());
        }

        info!("Running `{}` for {} project(s)", self.command, projects.len());

        let start = Instant::now();
        let mut results = Vec::with_capacity(projects.len());

        for project in projects {
            info!("Testing {project}");
            let result = self.run_project(project).await;
            info!("{result}");
            results.push(result);
        }

        let summary = RunSummary::new(results);

        info!(
            "Completed in {}ms - Pass: {}/{} ({:.1}%)",
            start.elapsed().as_millis(),
            summary.passed,
            summary.total,
            summary.pass_rate()
        );

        summary
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
