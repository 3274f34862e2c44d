//! multitest - Batch Test Orchestrator
//!
//! A CLI tool that runs the native test suite of every configured sub-project
//! in sequence and reports per-project pass/fail status. A failing or even
//! unlaunchable project never blocks the projects after it.
//!
//! ## Usage
//!
//! ```bash
//! # Run the test suites of the configured sub-projects
//! multitest run
//!
//! # Run an explicit selection, from a given root
//! multitest run rc rrc --root ~/work/repo
//!
//! # Machine-readable output, saved to disk
//! multitest run --format json --output results.json
//!
//! # Show what would run
//! multitest list --detailed
//!
//! # Write a starter config file
//! multitest config init
//! ```

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use std::path::Path;
use tracing::{debug, warn, Level};
use tracing_subscriber::FmtSubscriber;

mod cli;
mod config;
mod executor;
mod models;
mod output;
mod results;

use cli::Args;
use config::{AppConfig, EnvConfig};
use executor::SuiteRunner;
use models::ProjectEntry;
use output::{OutputFormat, ResultFormatter};
use results::StoredRun;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let env = EnvConfig::load();

    // Initialize logging
    let level = if args.verbose || env.verbose.unwrap_or(false) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    if env.has_any() {
        debug!("MULTITEST_* environment overrides active");
    }

    match args.command {
        cli::Command::Run(run_args) => {
            run_suites(run_args, &env).await?;
        }
        cli::Command::List(list_args) => {
            list_projects(list_args, &env)?;
        }
        cli::Command::Config(config_args) => {
            manage_config(config_args)?;
        }
    }

    Ok(())
}

/// Load configuration with flag and environment overrides applied.
///
/// Precedence: CLI flag, then environment, then config file, then defaults.
fn load_config(config_flag: &Option<String>, env: &EnvConfig) -> Result<AppConfig> {
    let mut config = match config_flag.clone().or_else(|| env.config_file.clone()) {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::discover()?,
    };

    if let Some(root) = &env.root {
        config.root = root.into();
    }
    if let Some(src_dir) = &env.src_dir {
        config.src_dir = src_dir.clone();
    }
    if let Some(fail_on_error) = env.fail_on_error {
        config.fail_on_error = fail_on_error;
    }

    Ok(config)
}

async fn run_suites(args: cli::RunArgs, env: &EnvConfig) -> Result<()> {
    let mut config = load_config(&args.config, env)?;

    if let Some(root) = &args.root {
        config.root = root.into();
    }
    if !args.projects.is_empty() {
        config.projects = args.projects.iter().cloned().map(ProjectEntry::from).collect();
    }

    if config.projects.is_empty() {
        warn!("No sub-projects configured; nothing to run");
        return Ok(());
    }

    let format = args
        .format
        .clone()
        .or_else(|| env.format.clone())
        .and_then(|f| OutputFormat::from_str(&f))
        .unwrap_or(OutputFormat::Table);
    let mut formatter = ResultFormatter::new(format);
    if args.no_color {
        formatter = formatter.no_color();
    }

    let started_at = Utc::now();
    let runner = SuiteRunner::new(&config);
    let summary = runner.run_all(&config.projects).await;

    println!("{}", formatter.format_summary(&summary));

    if let Some(path) = &args.output {
        let run = StoredRun::new(
            config.root.clone(),
            runner.command().to_string(),
            started_at,
            summary.clone(),
        );
        run.save(path)?;
    }

    // Aggregate exit status is opt-out: any non-passing project fails the run
    if config.fail_on_error && !args.no_fail_exit && !summary.is_all_passed() {
        std::process::exit(1);
    }

    Ok(())
}

fn list_projects(args: cli::ListArgs, env: &EnvConfig) -> Result<()> {
    let mut config = load_config(&args.config, env)?;

    if let Some(root) = &args.root {
        config.root = root.into();
    }

    if config.projects.is_empty() {
        println!("No sub-projects configured.");
        return Ok(());
    }

    println!("\nConfigured sub-projects ({} total)\n", config.projects.len());

    let runner = SuiteRunner::new(&config);
    for project in &config.projects {
        if args.detailed {
            println!(
                "  {:24} {}",
                project.name(),
                runner.test_dir(project).display()
            );
        } else {
            println!("  {project}");
        }
    }

    if args.detailed {
        println!("\nCommand: {}", config.command);
    }
    println!();

    Ok(())
}

fn manage_config(args: cli::ConfigArgs) -> Result<()> {
    match args.action {
        cli::ConfigAction::Init { path } => {
            if Path::new(&path).exists() {
                anyhow::bail!("Config file already exists: {path}");
            }
            AppConfig::default().save(&path)?;
            println!("✓ Wrote starter config to {path}");
        }

        cli::ConfigAction::Show { file } => {
            let config = match file {
                Some(path) => AppConfig::load(path)?,
                None => AppConfig::discover()?,
            };
            print!("{}", serde_yaml::to_string(&config)?);
        }

        cli::ConfigAction::Env => {
            config::env::print_env_help();
        }
    }

    Ok(())
}
