//! Configuration module
//!
//! Handles loading and managing configuration. Configuration is built once at
//! startup and never mutated during a run.

pub mod env;

pub use env::EnvConfig;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::models::ProjectEntry;

/// Configuration file locations (in order of precedence)
const CONFIG_LOCATIONS: &[&str] = &[
    "./multitest.yaml",
    "./multitest.yml",
    "./.multitest.yaml",
    "./.multitest/config.yaml",
];

/// Structured test command: an executable and its argument vector.
///
/// Invoked directly with an explicit working directory, never through a shell.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TestCommand {
    /// Program to execute
    pub program: String,

    /// Arguments passed to the program
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for TestCommand {
    fn default() -> Self {
        Self {
            program: "cargo".to_string(),
            args: vec!["test".to_string()],
        }
    }
}

impl fmt::Display for TestCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Root directory holding the sub-project directories
    pub root: PathBuf,

    /// Subdirectory of each project the test command runs from
    pub src_dir: String,

    /// Native test command invoked per project
    pub command: TestCommand,

    /// Ordered list of sub-projects to test
    pub projects: Vec<ProjectEntry>,

    /// Exit non-zero when any project does not pass
    pub fail_on_error: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            src_dir: "src".to_string(),
            command: TestCommand::default(),
            projects: Vec::new(),
            fail_on_error: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read config file {}", path.as_ref().display())
        })?;

        let config: Self = if is_yaml(path.as_ref()) {
            serde_yaml::from_str(&content).context("Failed to parse YAML config")?
        } else {
            serde_json::from_str(&content).context("Failed to parse JSON config")?
        };

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = if is_yaml(path.as_ref()) {
            serde_yaml::to_string(self).context("Failed to serialize config")?
        } else {
            serde_json::to_string_pretty(self).context("Failed to serialize config")?
        };

        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    /// Find and load a configuration file from the standard locations.
    ///
    /// Falls back to defaults when no file is found.
    pub fn discover() -> Result<Self> {
        for location in Self::locations() {
            if location.exists() {
                tracing::debug!("Loading config from {}", location.display());
                return Self::load(&location);
            }
        }
        Ok(Self::default())
    }

    /// Candidate config file paths, in precedence order
    pub fn locations() -> Vec<PathBuf> {
        let mut locations: Vec<PathBuf> = CONFIG_LOCATIONS.iter().map(PathBuf::from).collect();
        if let Some(config_dir) = dirs::config_dir() {
            locations.push(config_dir.join("multitest").join("config.yaml"));
        }
        locations
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .map(|e| e == "yaml" || e == "yml")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = AppConfig::default();
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.src_dir, "src");
        assert_eq!(config.command.program, "cargo");
        assert_eq!(config.command.args, vec!["test"]);
        assert!(config.projects.is_empty());
        assert!(config.fail_on_error);
    }

    #[test]
    fn command_display() {
        assert_eq!(TestCommand::default().to_string(), "cargo test");
        let bare = TestCommand {
            program: "make".to_string(),
            args: Vec::new(),
        };
        assert_eq!(bare.to_string(), "make");
    }

    #[test]
    fn load_yaml_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("multitest.yaml");
        std::fs::write(
            &path,
            "root: /work/repo\nprojects:\n  - rc\n  - rrc\nfail_on_error: false\n",
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.root, PathBuf::from("/work/repo"));
        assert_eq!(
            config.projects,
            vec![ProjectEntry::from("rc"), ProjectEntry::from("rrc")]
        );
        assert!(!config.fail_on_error);
        // Unspecified fields keep their defaults
        assert_eq!(config.src_dir, "src");
        assert_eq!(config.command.program, "cargo");
    }

    #[test]
    fn save_and_reload_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = AppConfig::default();
        config.projects = vec![ProjectEntry::from("mset-mu-hash")];
        config.save(&path).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded.projects, config.projects);
    }
}
