//! Custom error types for pngfit.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the pngfit library.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to decode a PNG file.
    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to encode the normalized canvas.
    #[error("failed to encode image for {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to write encoded bytes back to disk.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to list the target directory.
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Result type alias for pngfit operations.
pub type Result<T> = std::result::Result<T, Error>;
