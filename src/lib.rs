//! # pngfit
//!
//! Batch-normalize the PNG images of a directory to one fixed size.
//!
//! Every `.png` file is decoded to RGBA, shrunk to fit the target box with its
//! aspect ratio intact, centered on a fully transparent canvas of exactly the
//! target size, and re-encoded over the original file. A file that fails is
//! reported and skipped; the rest of the batch still runs.
//!
//! ## Example
//!
//! ```no_run
//! use pngfit::{normalize_directory, Config, TargetSize};
//!
//! # fn main() -> pngfit::Result<()> {
//! let config = Config {
//!     target_size: TargetSize::new(128, 128),
//!     ..Config::new("img")
//! };
//!
//! let report = normalize_directory(&config)?;
//! println!("{} normalized, {} failed", report.normalized(), report.failed());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod image;
pub mod normalize;

pub use error::{Error, Result};
pub use crate::image::{TargetSize, WriteMode, DEFAULT_TARGET_SIZE};
pub use normalize::{normalize_directory, normalize_file, BatchReport, Config, FileOutcome};
