//! Test execution engine
//!
//! Drives sub-project test suites sequentially with per-project failure isolation.

mod runner;

pub use runner::{InvocationError, SuiteRunner};
