//! Corner cropping for fixed-size square sources.
//!
//! The geometry is compile-time fixed: an 800x800 source yields four 512x512
//! tiles anchored at the four corners. The right and bottom tiles start at
//! `SOURCE_SIZE - TILE_SIZE`, so each tile overlaps its neighbours by a
//! 224px band.
//!
//! # Example
//!
//! ```ignore
//! use quadtile_core::transform::crop_corners;
//!
//! let source = image::open("scene.tiff")?;
//! for (corner, tile) in crop_corners(&source)? {
//!     println!("{}: {}x{}", corner.label(), tile.width(), tile.height());
//! }
//! ```

use image::{DynamicImage, GenericImageView};

use crate::corner::Corner;
use crate::error::TileError;
use crate::{SOURCE_SIZE, TILE_SIZE};

/// Crop the four corner tiles out of a source image.
///
/// # Arguments
///
/// * `image` - Source image; must be exactly 800x800.
///
/// # Returns
///
/// The four tiles paired with their corners, in [`Corner::ALL`] order, or
/// [`TileError::DimensionMismatch`] (and zero tiles) if the source has any
/// other size. Validation is all-or-nothing: a wrong-size source never
/// yields a partial tile set.
pub fn crop_corners(image: &DynamicImage) -> Result<Vec<(Corner, DynamicImage)>, TileError> {
    let (width, height) = image.dimensions();
    if width != SOURCE_SIZE || height != SOURCE_SIZE {
        return Err(TileError::DimensionMismatch {
            width,
            height,
            expected: SOURCE_SIZE,
        });
    }

    Ok(Corner::ALL
        .into_iter()
        .map(|corner| {
            let (x, y) = corner.crop_origin();
            (corner, image.crop_imm(x, y, TILE_SIZE, TILE_SIZE))
        })
        .collect())
}

#[cfg(test)]
fn test_source() -> DynamicImage {
    use image::{Rgb, RgbImage};

    // Position-dependent pattern with no rotational symmetry.
    DynamicImage::ImageRgb8(RgbImage::from_fn(SOURCE_SIZE, SOURCE_SIZE, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_produces_four_tiles() {
        let tiles = crop_corners(&test_source()).unwrap();
        assert_eq!(tiles.len(), 4);

        let corners: Vec<Corner> = tiles.iter().map(|(c, _)| *c).collect();
        assert_eq!(corners, Corner::ALL);
    }

    #[test]
    fn test_tiles_are_fixed_size() {
        for (_, tile) in crop_corners(&test_source()).unwrap() {
            assert_eq!(tile.dimensions(), (TILE_SIZE, TILE_SIZE));
        }
    }

    #[test]
    fn test_tile_origins_match_source() {
        let source = test_source();
        for (corner, tile) in crop_corners(&source).unwrap() {
            let (ox, oy) = corner.crop_origin();
            assert_eq!(
                tile.get_pixel(0, 0),
                source.get_pixel(ox, oy),
                "origin mismatch for {corner:?}"
            );
            assert_eq!(
                tile.get_pixel(TILE_SIZE - 1, TILE_SIZE - 1),
                source.get_pixel(ox + TILE_SIZE - 1, oy + TILE_SIZE - 1),
                "far-corner mismatch for {corner:?}"
            );
        }
    }

    #[test]
    fn test_overlap_band_is_shared() {
        let source = test_source();
        let tiles = crop_corners(&source).unwrap();

        // Column 288 of the source sits in both left and right tiles.
        let (_, top_left) = &tiles[0];
        let (_, top_right) = &tiles[1];
        assert_eq!(top_left.get_pixel(288, 100), top_right.get_pixel(0, 100));
    }

    #[test]
    fn test_rejects_wrong_width() {
        let narrow = test_source().crop_imm(0, 0, 799, 800);
        match crop_corners(&narrow) {
            Err(TileError::DimensionMismatch {
                width,
                height,
                expected,
            }) => {
                assert_eq!((width, height), (799, 800));
                assert_eq!(expected, SOURCE_SIZE);
            }
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_wrong_height() {
        let short = test_source().crop_imm(0, 0, 800, 799);
        assert!(matches!(
            crop_corners(&short),
            Err(TileError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_rejects_larger_square() {
        use image::{Rgb, RgbImage};

        let big = DynamicImage::ImageRgb8(RgbImage::from_pixel(1024, 1024, Rgb([0, 0, 0])));
        assert!(matches!(
            crop_corners(&big),
            Err(TileError::DimensionMismatch {
                width: 1024,
                height: 1024,
                ..
            })
        ));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
