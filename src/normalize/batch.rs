//! Directory scan and per-file normalization.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::image::{self, TargetSize, WriteMode};

use super::report::{BatchReport, FileOutcome};

/// Configuration for a normalization run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory whose top-level `.png` files are rewritten.
    pub directory: PathBuf,

    /// Exact dimensions of every output file.
    pub target_size: TargetSize,

    /// How rewritten files replace the originals.
    pub write_mode: WriteMode,
}

impl Config {
    /// Configuration for `directory` with the default 256x256 target.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(directory: P) -> Self {
        Self {
            directory: directory.into(),
            target_size: TargetSize::default(),
            write_mode: WriteMode::default(),
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if either target dimension is zero.
    pub fn validate(&self) -> Result<()> {
        if self.target_size.width == 0 {
            return Err(Error::InvalidParameter {
                name: "width".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        if self.target_size.height == 0 {
            return Err(Error::InvalidParameter {
                name: "height".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Normalize every `.png` file directly inside `config.directory`.
///
/// A missing directory is logged and reported through
/// [`BatchReport::directory_missing`], not returned as an error. Failures on
/// individual files are logged, recorded in the report, and the batch moves on.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the directory exists
/// but cannot be listed.
pub fn normalize_directory(config: &Config) -> Result<BatchReport> {
    config.validate()?;

    let directory = &config.directory;
    let mut report = BatchReport {
        directory: directory.clone(),
        ..BatchReport::default()
    };

    if !directory.exists() {
        tracing::error!("Directory {} not found", directory.display());
        report.directory_missing = true;
        tracing::info!("Done: nothing to normalize");
        return Ok(report);
    }

    tracing::info!("Normalizing PNG files in: {}", directory.display());

    for (file_name, path) in list_png_files(directory)? {
        let outcome = match normalize_file(&path, config.target_size, config.write_mode) {
            Ok(thumbnail) => {
                tracing::info!("Optimized: {file_name} ({}x{})", thumbnail.0, thumbnail.1);
                FileOutcome::Normalized {
                    file_name,
                    thumbnail,
                }
            }
            Err(error) => {
                tracing::error!("Failed to process {file_name}: {error}");
                FileOutcome::Failed { file_name, error }
            }
        };
        report.outcomes.push(outcome);
    }

    tracing::info!(
        "Done: {} normalized, {} failed",
        report.normalized(),
        report.failed()
    );

    Ok(report)
}

/// Rewrite one PNG as a `target`-sized canvas with its content centered.
///
/// Returns the size of the content before padding.
///
/// # Errors
///
/// Returns an error if the file cannot be decoded, encoded, or written.
pub fn normalize_file<P: AsRef<Path>>(
    path: P,
    target: TargetSize,
    write_mode: WriteMode,
) -> Result<(u32, u32)> {
    let path = path.as_ref();

    let source = image::load_image(path)?;
    tracing::debug!(
        "Loaded {} ({}x{})",
        path.display(),
        source.width(),
        source.height()
    );

    let thumb = image::thumbnail(source, target);
    let canvas = image::compose_centered(&thumb, target);

    image::save_image(&canvas, path, write_mode)?;

    Ok(thumb.dimensions())
}

/// List top-level entries ending in `.png` (any case), in directory order.
fn list_png_files(directory: &Path) -> Result<Vec<(String, PathBuf)>> {
    let read_dir_error = |source: std::io::Error| Error::ReadDir {
        path: directory.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(directory).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();

        if is_png_name(&file_name) && path.is_file() {
            files.push((file_name, path));
        }
    }

    Ok(files)
}

fn is_png_name(file_name: &str) -> bool {
    file_name.to_lowercase().ends_with(".png")
}
