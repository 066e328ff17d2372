//! # bytediff
//!
//! A byte-level file and directory comparison tool. Compares two files or two
//! directory trees and reports the first point(s) of divergence with a bounded,
//! human-readable preview around each differing byte run.

pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod output;
pub mod scanner;

pub use compare::Comparator;
pub use config::ReportLimits;
pub use error::{BytediffError, Result};

/// Number of context bytes shown on each side of a divergence run
pub const CONTEXT_BYTES: usize = 5;
