//! Quadtile Core - batch corner tiling for fixed-size square images
//!
//! This crate splits 800x800 source images into four overlapping 512x512
//! corner tiles, then rotates three of the four tiles in place according to
//! the corner encoded in each tile's file name.
//!
//! # Pipeline
//!
//! 1. Crop phase: every qualifying TIFF in the input folder is validated,
//!    cropped into four corner tiles, and written to the output folder.
//! 2. Rotate phase: the output folder is rescanned and each tile is rotated
//!    in place by the angle fixed for its corner.
//!
//! The two phases share no in-memory state; they are coupled only through
//! the tile file-name convention (see [`Corner`]).

pub mod batch;
pub mod corner;
pub mod error;
pub mod report;
pub mod transform;

pub use batch::{crop_file, crop_folder, rotate_folder, run};
pub use corner::Corner;
pub use error::TileError;
pub use report::{CropSummary, FileOutcome, PipelineReport, RotateOutcome, RotateSummary};
pub use transform::{crop_corners, Rotation};

/// Required width and height of every source image, in pixels.
pub const SOURCE_SIZE: u32 = 800;

/// Width and height of each corner tile, in pixels.
pub const TILE_SIZE: u32 = 512;

/// Offset of the right/bottom tiles from the left/top edge.
///
/// Kept in lockstep with [`SOURCE_SIZE`] and [`TILE_SIZE`]: the right and
/// bottom tiles start at `SOURCE_SIZE - TILE_SIZE`, so each tile overlaps
/// its neighbours by `2 * TILE_SIZE - SOURCE_SIZE` pixels.
pub const TILE_OFFSET: u32 = SOURCE_SIZE - TILE_SIZE;

/// File extension written for every tile.
pub const TILE_EXTENSION: &str = "tiff";

/// Extensions that qualify a directory entry for processing
/// (matched case-insensitively).
pub const QUALIFYING_EXTENSIONS: [&str; 2] = ["tif", "tiff"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_offset() {
        assert_eq!(TILE_OFFSET, 288);
    }

    #[test]
    fn test_tiles_overlap() {
        // Adjacent tiles share a 224px band by construction.
        assert_eq!(TILE_SIZE - TILE_OFFSET, 224);
    }
}
