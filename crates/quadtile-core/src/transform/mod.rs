//! Tile transformation operations: corner cropping and rotation.
//!
//! Cropping runs first and decides each tile's corner; rotation runs as a
//! separate pass over the written tiles. The two passes share no state
//! beyond the tile file names.

mod crop;
mod rotation;

pub use crop::crop_corners;
pub use rotation::Rotation;
