//! Batch normalization of a directory of PNG files.

mod batch;
mod report;

pub use batch::{normalize_directory, normalize_file, Config};
pub use report::{BatchReport, FileOutcome};
