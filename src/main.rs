//! pngfit CLI - Normalize a directory of PNG images to one fixed size.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pngfit::{normalize_directory, Config, TargetSize, WriteMode, DEFAULT_TARGET_SIZE};

/// Shrink, center, and transparently pad every PNG in a directory, in place.
#[derive(Parser, Debug)]
#[command(name = "pngfit")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding the PNG files (not searched recursively).
    #[arg(value_name = "DIRECTORY", default_value = "img")]
    directory: PathBuf,

    /// Output width in pixels.
    #[arg(long, default_value_t = DEFAULT_TARGET_SIZE.width, value_name = "PX")]
    width: u32,

    /// Output height in pixels.
    #[arg(long, default_value_t = DEFAULT_TARGET_SIZE.height, value_name = "PX")]
    height: u32,

    /// Write each file to a temporary sibling and rename it over the original.
    #[arg(long)]
    atomic: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("pngfit={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    let directory = std::path::absolute(&args.directory).with_context(|| {
        format!("Failed to resolve directory {}", args.directory.display())
    })?;

    let config = Config {
        directory,
        target_size: TargetSize::new(args.width, args.height),
        write_mode: if args.atomic {
            WriteMode::Atomic
        } else {
            WriteMode::InPlace
        },
    };

    // Missing directories and per-file failures are already logged by the run
    normalize_directory(&config).context("Failed to normalize directory")?;

    Ok(())
}
