//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

use std::env;

/// Environment variable prefix
const ENV_PREFIX: &str = "MULTITEST";

/// Environment configuration from environment variables
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// Config file from MULTITEST_CONFIG
    pub config_file: Option<String>,
    /// Orchestration root from MULTITEST_ROOT
    pub root: Option<String>,
    /// Per-project source subdirectory from MULTITEST_SRC_DIR
    pub src_dir: Option<String>,
    /// Output format from MULTITEST_FORMAT
    pub format: Option<String>,
    /// Verbose from MULTITEST_VERBOSE
    pub verbose: Option<bool>,
    /// Fail-on-error from MULTITEST_FAIL_ON_ERROR
    pub fail_on_error: Option<bool>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self {
            config_file: get_env("CONFIG"),
            root: get_env("ROOT"),
            src_dir: get_env("SRC_DIR"),
            format: get_env("FORMAT"),
            verbose: get_env_bool("VERBOSE"),
            fail_on_error: get_env_bool("FAIL_ON_ERROR"),
        }
    }

    /// Check if any environment variables are set
    pub fn has_any(&self) -> bool {
        self.config_file.is_some()
            || self.root.is_some()
            || self.src_dir.is_some()
            || self.format.is_some()
            || self.verbose.is_some()
            || self.fail_on_error.is_some()
    }
}

fn get_env(suffix: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}_{suffix}")).ok()
}

fn get_env_bool(suffix: &str) -> Option<bool> {
    get_env(suffix).map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

/// Print supported environment variables
pub fn print_env_help() {
    println!("Supported environment variables:\n");
    println!("  {ENV_PREFIX}_CONFIG         Path to configuration file");
    println!("  {ENV_PREFIX}_ROOT           Root directory holding the sub-projects");
    println!("  {ENV_PREFIX}_SRC_DIR        Per-project subdirectory to run tests from");
    println!("  {ENV_PREFIX}_FORMAT         Output format (table, json, json-pretty, summary)");
    println!("  {ENV_PREFIX}_VERBOSE        Enable verbose logging (true/false)");
    println!("  {ENV_PREFIX}_FAIL_ON_ERROR  Exit non-zero when any project fails (true/false)");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_env_has_none() {
        let config = EnvConfig::default();
        assert!(!config.has_any());
    }

    #[test]
    fn bool_parsing() {
        env::set_var("MULTITEST_VERBOSE", "true");
        env::set_var("MULTITEST_FAIL_ON_ERROR", "0");
        let config = EnvConfig::load();
        assert_eq!(config.verbose, Some(true));
        assert_eq!(config.fail_on_error, Some(false));
        assert!(config.has_any());
        env::remove_var("MULTITEST_VERBOSE");
        env::remove_var("MULTITEST_FAIL_ON_ERROR");
    }
}
