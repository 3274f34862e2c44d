//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};

/// Batch test orchestrator for multi-project source trees
#[derive(Parser, Debug)]
#[command(name = "multitest")]
#[command(version)]
#[command(about = "Run every sub-project's test suite and report per-project status")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the configured sub-project test suites
    Run(RunArgs),

    /// List configured sub-projects
    List(ListArgs),

    /// Inspect and manage configuration
    Config(ConfigArgs),
}

/// Arguments for run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Sub-projects to test (overrides the configured list)
    pub projects: Vec<String>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Root directory holding the sub-project directories
    #[arg(short, long)]
    pub root: Option<String>,

    /// Output format (table, json, json-pretty, summary)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Disable colorized output
    #[arg(long)]
    pub no_color: bool,

    /// Save results to a JSON file
    #[arg(short, long)]
    pub output: Option<String>,

    /// Always exit zero, even when projects fail
    #[arg(long)]
    pub no_fail_exit: bool,
}

/// Arguments for list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Show resolved test directories and command line
    #[arg(short, long)]
    pub detailed: bool,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Root directory holding the sub-project directories
    #[arg(short, long)]
    pub root: Option<String>,
}

/// Arguments for config management
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a starter configuration file
    Init {
        /// Destination path
        #[arg(default_value = "./multitest.yaml")]
        path: String,
    },

    /// Print the effective configuration
    Show {
        /// Configuration file to read
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Print supported environment variables
    Env,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn run_accepts_positional_projects() {
        let args = Args::parse_from(["multitest", "run", "rc", "rrc", "--format", "json"]);
        match args.command {
            Command::Run(run) => {
                assert_eq!(run.projects, vec!["rc", "rrc"]);
                assert_eq!(run.format.as_deref(), Some("json"));
                assert!(!run.no_fail_exit);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn list_accepts_root_override() {
        let args = Args::parse_from(["multitest", "list", "--detailed", "--root", "/work/repo"]);
        match args.command {
            Command::List(list) => {
                assert!(list.detailed);
                assert_eq!(list.root.as_deref(), Some("/work/repo"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn config_init_default_path() {
        let args = Args::parse_from(["multitest", "config", "init"]);
        match args.command {
            Command::Config(config) => match config.action {
                ConfigAction::Init { path } => assert_eq!(path, "./multitest.yaml"),
                other => panic!("unexpected action: {other:?}"),
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
