//! Sequential folder driver: crop phase, then rotate phase.
//!
//! Every per-file operation blocks until the file is fully read and written
//! before the next file starts. Per-file failures are recorded in the
//! summary and never abort the batch; only directory-level failures
//! (create/list) propagate out of the folder functions.

use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};
use tracing::{debug, info, warn};

use crate::corner::Corner;
use crate::error::TileError;
use crate::report::{CropSummary, FileOutcome, PipelineReport, RotateOutcome, RotateSummary};
use crate::transform::{crop_corners, Rotation};
use crate::QUALIFYING_EXTENSIONS;

/// Run the full pipeline: crop every qualifying image in `input_dir` into
/// `output_dir`, then rotate the written tiles in place.
///
/// When `input_dir` holds no qualifying files the rotate phase is skipped
/// entirely and the report's `rotate` field is `None`.
///
/// The crop phase is idempotent: re-running it reproduces byte-identical
/// tiles. The rotate phase is NOT: re-running the pipeline against an output
/// folder whose tiles were already rotated rotates them further.
pub fn run(input_dir: &Path, output_dir: &Path) -> Result<PipelineReport, TileError> {
    let crop = crop_folder(input_dir, output_dir)?;
    if crop.is_empty() {
        return Ok(PipelineReport { crop, rotate: None });
    }

    let rotate = rotate_folder(output_dir)?;
    Ok(PipelineReport {
        crop,
        rotate: Some(rotate),
    })
}

/// Crop every qualifying file in `input_dir`, writing tiles to `output_dir`.
///
/// Creates `output_dir` if absent. Non-qualifying entries are skipped
/// silently; qualifying files are processed in sorted name order, and a
/// failure on one file never skips the rest of the batch.
pub fn crop_folder(input_dir: &Path, output_dir: &Path) -> Result<CropSummary, TileError> {
    fs::create_dir_all(output_dir).map_err(|source| TileError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let sources = qualifying_files(input_dir)?;
    if sources.is_empty() {
        info!(input_dir = %input_dir.display(), "no qualifying image files found");
        return Ok(CropSummary::default());
    }
    info!(count = sources.len(), "cropping batch");

    let mut summary = CropSummary::default();
    for source in sources {
        let result = crop_file(&source, output_dir);
        match &result {
            Ok(tiles) => debug!(source = %source.display(), tiles = tiles.len(), "cropped"),
            Err(err) => warn!(source = %source.display(), %err, "crop failed"),
        }
        summary.outcomes.push(FileOutcome { source, result });
    }

    info!(
        total = summary.total(),
        succeeded = summary.succeeded(),
        failed = summary.failed(),
        "crop phase finished"
    );
    Ok(summary)
}

/// Crop one source image into its four corner tiles.
///
/// Tiles are written to `output_dir` as `{stem}_{label}.tiff`. The outcome
/// is all-or-nothing per source, but a write failure on a later tile does
/// not remove siblings already written; a re-run of the idempotent crop
/// phase overwrites them consistently.
pub fn crop_file(source: &Path, output_dir: &Path) -> Result<Vec<PathBuf>, TileError> {
    let image = read_image(source)?;
    let tiles = crop_corners(&image)?;

    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut written = Vec::with_capacity(tiles.len());
    for (corner, tile) in tiles {
        let path = output_dir.join(corner.tile_file_name(&stem));
        write_image(&tile, &path)?;
        written.push(path);
    }
    Ok(written)
}

/// Rotate every qualifying tile in `dir` in place, by the angle fixed for
/// the corner in its file name.
///
/// Top-left tiles, and files whose name carries no corner label, are left
/// untouched and never opened. Each rotated tile overwrites the file it was
/// read from; no backup is kept, so a failure mid-write can corrupt that
/// tile.
pub fn rotate_folder(dir: &Path) -> Result<RotateSummary, TileError> {
    let files = qualifying_files(dir)?;
    info!(count = files.len(), dir = %dir.display(), "rotating tiles");

    let mut summary = RotateSummary::default();
    for path in files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let corner = Corner::from_file_name(&name);
        let rotation = corner.map_or(Rotation::None, Corner::rotation);

        let result = if rotation.is_none() {
            Ok(Rotation::None)
        } else {
            rotate_file(&path, rotation)
        };
        match &result {
            Ok(r) if !r.is_none() => {
                debug!(tile = %path.display(), degrees = r.degrees(), "rotated")
            }
            Ok(_) => {}
            Err(err) => warn!(tile = %path.display(), %err, "rotate failed"),
        }
        summary.outcomes.push(RotateOutcome {
            path,
            corner,
            result,
        });
    }

    info!(
        rotated = summary.rotated_total(),
        untouched = summary.untouched(),
        failed = summary.failed(),
        "rotate phase finished"
    );
    Ok(summary)
}

/// Rotate one tile in place, overwriting the file at `path`.
fn rotate_file(path: &Path, rotation: Rotation) -> Result<Rotation, TileError> {
    let image = read_image(path)?;
    let rotated = rotation.apply(&image);
    write_image(&rotated, path)?;
    Ok(rotation)
}

/// List the qualifying files directly under `dir`, sorted by name.
fn qualifying_files(dir: &Path) -> Result<Vec<PathBuf>, TileError> {
    let entries = fs::read_dir(dir).map_err(|source| TileError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| TileError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && has_qualifying_extension(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Case-insensitive match against the fixed extension set.
fn has_qualifying_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            QUALIFYING_EXTENSIONS
                .iter()
                .any(|q| ext.eq_ignore_ascii_case(q))
        })
}

fn read_image(path: &Path) -> Result<DynamicImage, TileError> {
    image::open(path).map_err(|source| TileError::Unreadable {
        path: path.to_path_buf(),
        source,
    })
}

fn write_image(image: &DynamicImage, path: &Path) -> Result<(), TileError> {
    image
        .save_with_format(path, ImageFormat::Tiff)
        .map_err(|source| TileError::Unwritable {
            path: path.to_path_buf(),
            source,
        })
}
