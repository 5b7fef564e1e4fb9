//! Quadtile CLI - batch corner tiling frontend.
//!
//! Thin wrapper over `quadtile-core`: parses the two directory paths, sets
//! up logging, runs the crop-then-rotate pipeline, and reports the
//! summaries. Exits non-zero if any file failed.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use quadtile_core::{run, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Split 800x800 TIFF images into four overlapping 512x512 corner tiles,
/// then rotate three of the four tiles in place.
#[derive(Debug, Parser)]
#[command(name = "quadtile", version)]
struct Args {
    /// Directory holding the source images (top-level entries only).
    input_dir: PathBuf,

    /// Directory the tiles are written to (created if missing).
    output_dir: PathBuf,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_logger(args.verbose);

    let report = run(&args.input_dir, &args.output_dir).with_context(|| {
        format!(
            "tiling pipeline failed for {}",
            args.input_dir.display()
        )
    })?;

    if report.no_qualifying_files() {
        tracing::info!(
            input_dir = %args.input_dir.display(),
            "no qualifying files, nothing to do"
        );
        return Ok(ExitCode::SUCCESS);
    }

    tracing::info!(
        total = report.crop.total(),
        succeeded = report.crop.succeeded(),
        failed = report.crop.failed(),
        "crop summary"
    );
    if let Some(rotate) = &report.rotate {
        tracing::info!(
            cw90 = rotate.rotated(Rotation::Cw90),
            cw180 = rotate.rotated(Rotation::Cw180),
            cw270 = rotate.rotated(Rotation::Cw270),
            untouched = rotate.untouched(),
            failed = rotate.failed(),
            "rotate summary"
        );
    }

    Ok(if report.failed() == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }
}
