//! Data models for batch test orchestration
//!
//! This module contains all data structures used throughout the application.

mod run_result;

pub use run_result::{Outcome, ProjectEntry, RunResult, RunSummary};
