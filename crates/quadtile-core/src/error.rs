//! Error types for tiling operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by per-file tile operations and the folder driver.
///
/// Per-file variants are caught by the driver and recorded in the batch
/// summary; they never abort a batch. Only the directory-level `Io` variant
/// propagates out of the folder functions themselves.
#[derive(Debug, Error)]
pub enum TileError {
    /// The source image does not have the required fixed dimensions.
    #[error("source is {width}x{height}, expected {expected}x{expected}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        expected: u32,
    },

    /// The source file could not be opened or decoded.
    #[error("failed to read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A tile could not be encoded or written.
    #[error("failed to write {}: {source}", .path.display())]
    Unwritable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A directory could not be created or listed.
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_message_names_both_sizes() {
        let err = TileError::DimensionMismatch {
            width: 640,
            height: 480,
            expected: 800,
        };
        let msg = err.to_string();
        assert!(msg.contains("640x480"), "message was: {msg}");
        assert!(msg.contains("800x800"), "message was: {msg}");
    }
}
