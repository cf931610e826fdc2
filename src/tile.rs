use core::num::NonZeroU8;
#[cfg(feature = "serialization")]
use serde::{Serialize, Deserialize};

/// A tile on a Minesweeper board.
///
/// The kind of a tile is fixed when the board is generated; only the `revealed` flag changes during play, and it only ever goes from `false` to `true`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Tile {
    kind: TileKind,
    revealed: bool,
}
impl Tile {
    /// Creates a hidden tile of the specified kind.
    #[inline]
    pub const fn hidden(kind: TileKind) -> Self {
        Self { kind, revealed: false }
    }
    /// Creates a tile of the specified kind which has already been revealed.
    #[inline]
    pub const fn revealed(kind: TileKind) -> Self {
        Self { kind, revealed: true }
    }
    /// Returns what the tile holds.
    #[inline(always)]
    pub const fn kind(self) -> TileKind {
        self.kind
    }
    /// Returns `true` if the tile has been revealed, `false` otherwise.
    #[inline(always)]
    pub const fn is_revealed(self) -> bool {
        self.revealed
    }
    /// Returns `true` if the tile contains a mine, `false` otherwise.
    #[inline]
    pub const fn is_mine(self) -> bool {
        matches!(self.kind, TileKind::Mine)
    }
    /// Returns `true` if revealing this tile does not detonate anything, `false` otherwise.
    #[inline(always)]
    pub const fn is_safe(self) -> bool {
        !self.is_mine()
    }
    /// Returns the number of mines around a safe tile, or `None` for a mine.
    #[inline]
    pub const fn adjacent_mines(self) -> Option<u8> {
        match self.kind {
            TileKind::Safe { adjacent_mines } => Some(adjacent_mines),
            TileKind::Mine => None,
        }
    }
    /// Returns `true` if revealing this tile spreads the reveal to its neighbors.
    ///
    /// Only safe tiles without any adjacent mines cascade.
    #[inline]
    pub const fn cascades(self) -> bool {
        matches!(self.kind, TileKind::Safe { adjacent_mines: 0 })
    }
    /// Marks the tile as revealed. Returns `false` if it already was.
    #[inline]
    pub(crate) fn reveal(&mut self) -> bool {
        !core::mem::replace(&mut self.revealed, true)
    }
}

/// What a tile holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum TileKind {
    /// A tile without a mine, along with the number of mines among its up to 8 neighbors.
    Safe {
        /// Number of mines in the surrounding tiles, `0..=8`.
        adjacent_mines: u8,
    },
    /// A tile with a mine inside.
    Mine,
}
impl Default for TileKind {
    /// Returns a safe tile with no mines around it.
    #[inline(always)]
    fn default() -> Self {
        Self::Safe { adjacent_mines: 0 }
    }
}

/// The result of looking up a tile at arbitrary coordinates.
///
/// Lookups outside of the board don't fail; they produce `OutOfBounds`, which is never stored on the board and can't be mutated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Probe {
    /// The coordinates are on the board; this is a copy of the tile there.
    Tile(Tile),
    /// The coordinates are outside of the board.
    OutOfBounds,
}
impl Probe {
    /// Returns `true` if the probe hit a mine. Out-of-bounds coordinates never hold one.
    #[inline]
    pub const fn is_mine(self) -> bool {
        match self {
            Self::Tile(tile) => tile.is_mine(),
            Self::OutOfBounds => false,
        }
    }
    /// Returns the tile, or `None` if the probe missed the board.
    #[inline]
    pub const fn tile(self) -> Option<Tile> {
        match self {
            Self::Tile(tile) => Some(tile),
            Self::OutOfBounds => None,
        }
    }
}
impl From<Option<Tile>> for Probe {
    fn from(op: Option<Tile>) -> Self {
        op.map_or(Self::OutOfBounds, Self::Tile)
    }
}

/// The event produced after revealing a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The coordinates are outside of the board. Nothing changes.
    OutOfBounds,
    /// The tile had already been revealed. Nothing changes.
    AlreadyRevealed,
    /// A mine was revealed. Reveals never spread from mines.
    Mine,
    /// A safe tile with neighboring mines was revealed, and only that tile.
    Number(NonZeroU8),
    /// A tile without neighboring mines was revealed and the reveal spread over the clearing around it.
    ///
    /// Carries the number of tiles revealed by the operation, including the one which was targeted.
    Clearing(core::num::NonZeroUsize),
}
impl RevealOutcome {
    /// Returns `true` if the reveal changed the board.
    #[inline]
    pub const fn changed_board(self) -> bool {
        !matches!(self, Self::OutOfBounds | Self::AlreadyRevealed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_flag_is_monotonic() {
        let mut tile = Tile::hidden(TileKind::Safe { adjacent_mines: 2 });
        assert!(tile.reveal());
        assert!(!tile.reveal());
        assert!(tile.is_revealed());
    }

    #[test]
    fn only_empty_safe_tiles_cascade() {
        assert!(Tile::hidden(TileKind::default()).cascades());
        assert!(!Tile::hidden(TileKind::Safe { adjacent_mines: 1 }).cascades());
        assert!(!Tile::hidden(TileKind::Mine).cascades());
    }

    #[test]
    fn out_of_bounds_probe_is_never_a_mine() {
        assert!(!Probe::OutOfBounds.is_mine());
        assert_eq!(Probe::from(None), Probe::OutOfBounds);
        assert!(Probe::Tile(Tile::hidden(TileKind::Mine)).is_mine());
    }
}
