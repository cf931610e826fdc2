//! Errors produced when constructing boards and board geometry.
//!
//! Play itself never fails: revealing or hit-testing outside the board is a no-op. Only constructors are fallible.

use crate::FieldCoordinates;

/// Errors that occur while building a board or the geometry used to draw it.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum BoardError {
    /// One of the requested dimensions is zero.
    #[error("board dimensions must be non-zero (requested {width}x{height})")]
    EmptyDimension {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// The board would hold more tiles than can ever be stored.
    #[error("a {width}x{height} board is too large to be stored")]
    AreaOverflow {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// The tile storage does not cover the board area exactly.
    #[error("expected {expected} tiles for the board area, got {actual}")]
    StorageSize {
        /// Area of the board.
        expected: usize,
        /// Number of tiles supplied.
        actual: usize,
    },
    /// A safe tile carries an adjacency count that disagrees with the mines around it.
    #[error("tile at {location:?} says {found} adjacent mines, but {expected} surround it")]
    InconsistentCount {
        /// The offending tile.
        location: FieldCoordinates,
        /// The count derived from the neighboring mines.
        expected: u8,
        /// The count stored in the tile.
        found: u8,
    },
    /// A revealed tile without adjacent mines has a hidden orthogonal neighbor, which no cascade leaves behind.
    #[error("revealed clearing at {location:?} borders hidden tile at {neighbor:?}")]
    UnfinishedClearing {
        /// The revealed tile without adjacent mines.
        location: FieldCoordinates,
        /// The hidden neighbor the cascade should have reached.
        neighbor: FieldCoordinates,
    },
    /// Tiles must have a finite, positive size in draw space.
    #[error("tile size must be finite and positive, got {0}")]
    InvalidTileSize(f32),
}
