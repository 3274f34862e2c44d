//! Results storage module
//!
//! Provides persistent storage for completed runs.

#![allow(dead_code)]

mod storage;

pub use storage::StoredRun;
