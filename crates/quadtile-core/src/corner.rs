//! Corner taxonomy and the tile file-name contract.
//!
//! A tile's corner is decided once, at crop time, and embedded into the
//! tile's file name. The rotate phase recovers it with
//! [`Corner::from_file_name`]; that parser is the only coupling between the
//! two phases.

use serde::{Deserialize, Serialize};

use crate::transform::Rotation;
use crate::{TILE_EXTENSION, TILE_OFFSET};

/// One of the four corners of a square source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All corners, in the order tiles are cropped and written.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Match priority for [`Corner::from_file_name`]. The first label
    /// contained in the name wins, so a name carrying several labels
    /// resolves deterministically.
    const DETECT_ORDER: [Corner; 4] = [
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
        Corner::TopLeft,
    ];

    /// The label embedded in tile file names.
    pub fn label(self) -> &'static str {
        match self {
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
            Corner::BottomLeft => "bottom-left",
            Corner::BottomRight => "bottom-right",
        }
    }

    /// Top-left pixel of this corner's crop region in the source image.
    #[inline]
    pub fn crop_origin(self) -> (u32, u32) {
        match self {
            Corner::TopLeft => (0, 0),
            Corner::TopRight => (TILE_OFFSET, 0),
            Corner::BottomLeft => (0, TILE_OFFSET),
            Corner::BottomRight => (TILE_OFFSET, TILE_OFFSET),
        }
    }

    /// The fixed clockwise rotation applied to this corner's tile.
    ///
    /// Top-left tiles are never rotated, and the rotate phase does not even
    /// open them.
    #[inline]
    pub fn rotation(self) -> Rotation {
        match self {
            Corner::TopLeft => Rotation::None,
            Corner::TopRight => Rotation::Cw90,
            Corner::BottomRight => Rotation::Cw180,
            Corner::BottomLeft => Rotation::Cw270,
        }
    }

    /// File name for this corner's tile of a source with the given stem.
    pub fn tile_file_name(self, stem: &str) -> String {
        format!("{stem}_{}.{TILE_EXTENSION}", self.label())
    }

    /// Recover the corner from a tile file name.
    ///
    /// Matches by substring containment rather than equality, because tile
    /// names carry the source stem as a shared prefix. Candidates are tried
    /// in a fixed priority order (top-right, bottom-right, bottom-left,
    /// top-left); the first label contained in `name` wins.
    pub fn from_file_name(name: &str) -> Option<Corner> {
        Self::DETECT_ORDER
            .into_iter()
            .find(|corner| name.contains(corner.label()))
    }
}
