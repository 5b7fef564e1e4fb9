//! Structured batch outcomes.
//!
//! The driver reports through these types rather than console text: the CLI
//! derives its log lines from them and tests assert on them directly.

use std::path::PathBuf;

use crate::corner::Corner;
use crate::error::TileError;
use crate::transform::Rotation;

/// Outcome of cropping one source file.
#[derive(Debug)]
pub struct FileOutcome {
    /// Path of the source image.
    pub source: PathBuf,
    /// Paths of the written tiles, or the error that failed the source.
    pub result: Result<Vec<PathBuf>, TileError>,
}

/// Summary of one crop phase over an input folder.
#[derive(Debug, Default)]
pub struct CropSummary {
    /// Per-file outcomes, in processing order.
    pub outcomes: Vec<FileOutcome>,
}

impl CropSummary {
    /// Number of qualifying source files seen.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of sources cropped successfully.
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    /// Number of sources that failed.
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    /// True when the input folder held no qualifying files.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Outcome of the rotate phase for one tile file.
#[derive(Debug)]
pub struct RotateOutcome {
    /// Path of the tile.
    pub path: PathBuf,
    /// Corner recovered from the file name, if any.
    pub corner: Option<Corner>,
    /// Rotation applied ([`Rotation::None`] means the file was not touched),
    /// or the error that failed the tile.
    pub result: Result<Rotation, TileError>,
}

/// Summary of one rotate phase over an output folder.
#[derive(Debug, Default)]
pub struct RotateSummary {
    /// Per-file outcomes, in processing order.
    pub outcomes: Vec<RotateOutcome>,
}

impl RotateSummary {
    /// Number of tiles rotated by exactly `rotation`.
    ///
    /// Always zero for [`Rotation::None`]; untouched files are counted by
    /// [`RotateSummary::untouched`] instead.
    pub fn rotated(&self, rotation: Rotation) -> usize {
        if rotation.is_none() {
            return 0;
        }
        self.outcomes
            .iter()
            .filter(|o| matches!(&o.result, Ok(r) if *r == rotation))
            .count()
    }

    /// Total number of tiles rewritten by the rotate phase.
    pub fn rotated_total(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(&o.result, Ok(r) if !r.is_none()))
            .count()
    }

    /// Number of files left untouched (top-left tiles and files whose name
    /// carries no corner label).
    pub fn untouched(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(&o.result, Ok(r) if r.is_none()))
            .count()
    }

    /// Number of tiles that failed.
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }
}

/// Result of a full pipeline run.
#[derive(Debug)]
pub struct PipelineReport {
    /// Crop phase summary.
    pub crop: CropSummary,
    /// Rotate phase summary; `None` when the crop phase found no qualifying
    /// files and the rotate phase was skipped entirely.
    pub rotate: Option<RotateSummary>,
}

impl PipelineReport {
    /// True when the input folder held no qualifying files and no crop or
    /// rotate work was performed.
    pub fn no_qualifying_files(&self) -> bool {
        self.crop.is_empty() && self.rotate.is_none()
    }

    /// Total number of files that failed across both phases.
    pub fn failed(&self) -> usize {
        self.crop.failed() + self.rotate.as_ref().map_or(0, RotateSummary::failed)
    }
}
