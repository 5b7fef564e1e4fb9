//! Tile rotation by multiples of 90 degrees.
//!
//! Angles are clockwise and fixed per corner (see
//! [`Corner::rotation`](crate::Corner::rotation)). Square tiles keep their
//! canvas dimensions under every variant; there is no expansion or
//! crop-to-fit.

use image::DynamicImage;
use serde::{Deserialize, Serialize};

/// A clockwise rotation by a multiple of 90 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rotation {
    /// No rotation; the tile is left untouched.
    #[default]
    None,
    /// 90 degrees clockwise.
    Cw90,
    /// 180 degrees.
    Cw180,
    /// 270 degrees clockwise.
    Cw270,
}

impl Rotation {
    /// Rotation angle in clockwise degrees.
    #[inline]
    pub fn degrees(self) -> u32 {
        match self {
            Rotation::None => 0,
            Rotation::Cw90 => 90,
            Rotation::Cw180 => 180,
            Rotation::Cw270 => 270,
        }
    }

    /// Whether applying this rotation leaves the image unchanged.
    #[inline]
    pub fn is_none(self) -> bool {
        matches!(self, Rotation::None)
    }

    /// Apply the rotation, returning a new image.
    ///
    /// For square inputs the output dimensions equal the input dimensions;
    /// for 90/270 the width and height swap.
    pub fn apply(self, image: &DynamicImage) -> DynamicImage {
        match self {
            Rotation::None => image.clone(),
            Rotation::Cw90 => image.rotate90(),
            Rotation::Cw180 => image.rotate180(),
            Rotation::Cw270 => image.rotate270(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgb, RgbImage};

    /// 4x4 black image with a white marker at (1, 0).
    fn marked_image() -> DynamicImage {
        let mut img = RgbImage::from_pixel(4, 4, Rgb([0, 0, 0]));
        img.put_pixel(1, 0, Rgb([255, 255, 255]));
        DynamicImage::ImageRgb8(img)
    }

    fn is_marker(image: &DynamicImage, x: u32, y: u32) -> bool {
        image.get_pixel(x, y)[0] == 255
    }

    #[test]
    fn test_degrees() {
        assert_eq!(Rotation::None.degrees(), 0);
        assert_eq!(Rotation::Cw90.degrees(), 90);
        assert_eq!(Rotation::Cw180.degrees(), 180);
        assert_eq!(Rotation::Cw270.degrees(), 270);
    }

    #[test]
    fn test_none_is_identity() {
        let img = marked_image();
        let result = Rotation::None.apply(&img);
        assert_eq!(result.as_bytes(), img.as_bytes());
    }

    #[test]
    fn test_cw90_moves_marker() {
        // Clockwise 90: src (x, y) lands at (h - 1 - y, x).
        let result = Rotation::Cw90.apply(&marked_image());
        assert!(is_marker(&result, 3, 1));
    }

    #[test]
    fn test_cw180_moves_marker() {
        // 180: src (x, y) lands at (w - 1 - x, h - 1 - y).
        let result = Rotation::Cw180.apply(&marked_image());
        assert!(is_marker(&result, 2, 3));
    }

    #[test]
    fn test_cw270_moves_marker() {
        // Clockwise 270: src (x, y) lands at (y, w - 1 - x).
        let result = Rotation::Cw270.apply(&marked_image());
        assert!(is_marker(&result, 0, 2));
    }

    #[test]
    fn test_square_dimensions_preserved() {
        let img = marked_image();
        for rotation in [
            Rotation::None,
            Rotation::Cw90,
            Rotation::Cw180,
            Rotation::Cw270,
        ] {
            let result = rotation.apply(&img);
            assert_eq!(result.dimensions(), img.dimensions());
        }
    }

    #[test]
    fn test_two_quarter_turns_equal_half_turn() {
        // Rotating 90 twice is the half turn; this is why re-running the
        // rotate phase over an already-rotated folder corrupts it.
        let img = marked_image();
        let twice = Rotation::Cw90.apply(&Rotation::Cw90.apply(&img));
        let once = Rotation::Cw180.apply(&img);
        assert_eq!(twice.as_bytes(), once.as_bytes());
    }
}
