//! The board of a Minesweeper game.
//!
//! This is the main point of interest for the game: mines are placed here, adjacency counts are derived here, and reveals (including the cascading flood fill over clearings) happen here.

use core::{
    ops::Index,
    num::{NonZeroUsize, NonZeroU8},
};
use alloc::vec::Vec;
#[cfg(feature = "serialization")]
use serde::{Serialize, Deserialize};
use crate::{
    Tile, TileKind, Probe, RevealOutcome,
    MineSource, BoardError,
    RowIter, BoardRowsIter, Cells,
};

/// The dimensions of a board.
///
/// The first element specifies the width (the number of columns), while the second one specifies the height (number of rows). As required by `NonZeroUsize`, a board cannot be smaller than 1x1.
pub type FieldDimensions = [NonZeroUsize; 2];
/// The coordinates of a tile on a board.
///
/// The first element specifies the column index (X coordinate), while the second one specifies the row index (Y coordinate). The coordinates `[0, 0]` correspond to the top left corner. Coordinates are signed: anything negative or past the dimensions of the board simply points outside of it.
pub type FieldCoordinates = [isize; 2];

/// Offsets of the 8 neighbors of a tile, clockwise starting from top-left: ↖, ↑, ↗, →, ↘, ↓, ↙, ←.
pub const NEIGHBOR_OFFSETS: [FieldCoordinates; 8] = [
    [-1, -1], [0, -1], [1, -1],
    [1, 0], [1, 1], [0, 1],
    [-1, 1], [-1, 0],
];
/// Offsets a reveal cascades to from a tile without adjacent mines: up, left, right, down.
///
/// Diagonals are counted for adjacency but never cascaded to.
pub const CASCADE_OFFSETS: [FieldCoordinates; 4] = [[0, -1], [-1, 0], [1, 0], [0, 1]];

/// Validates a pair of dimensions.
pub fn field_dimensions(width: usize, height: usize) -> Result<FieldDimensions, BoardError> {
    match (NonZeroUsize::new(width), NonZeroUsize::new(height)) {
        (Some(width), Some(height)) => Ok([width, height]),
        _ => {
            tracing::warn!(width, height, "rejected empty board dimensions");
            Err(BoardError::EmptyDimension { width, height })
        }
    }
}

/// Returns the number of tiles a board with the specified dimensions holds.
///
/// Fails if the tiles could never fit in memory, which also keeps every storage index representable as a coordinate.
pub fn field_area(dimensions: FieldDimensions) -> Result<usize, BoardError> {
    let [width, height] = dimensions.map(NonZeroUsize::get);
    width
        .checked_mul(height)
        .filter(|area| area.checked_mul(core::mem::size_of::<Tile>()).is_some_and(|bytes| bytes <= isize::MAX as usize))
        .ok_or_else(|| {
            tracing::warn!(width, height, "rejected board area");
            BoardError::AreaOverflow { width, height }
        })
}

/// Adds an offset to coordinates. Saturates instead of overflowing, which keeps far-off coordinates out of bounds.
#[inline]
pub const fn offset(location: FieldCoordinates, by: FieldCoordinates) -> FieldCoordinates {
    [location[0].saturating_add(by[0]), location[1].saturating_add(by[1])]
}

/// Converts a row-major storage index into coordinates on a board of the specified width.
#[inline]
#[allow(clippy::cast_possible_wrap)] // Storage indices never exceed isize::MAX.
pub(crate) const fn coordinates_of(index: usize, width: usize) -> FieldCoordinates {
    [(index % width) as isize, (index / width) as isize]
}

/// Represents a board.
///
/// Boards are matrices of [tiles][tile] with dimensions fixed at construction. Mines are placed exactly once, by [`generate`][m_generate]; after that, the only thing which ever changes is which tiles have been revealed, through [`reveal`][m_reveal]. Restarting a game means building a new board.
///
/// [tile]: struct.Tile.html "Tile — a tile on a Minesweeper board"
/// [m_generate]: #method.generate "generate — places mines and derives adjacency counts"
/// [m_reveal]: #method.reveal "reveal — reveals a tile, cascading over clearings"
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(try_from = "RawBoard", into = "RawBoard"))]
pub struct Board {
    dimensions: FieldDimensions,
    storage: Vec<Tile>,
}
impl Board {
    /// Generates a board with the specified dimensions, asking the mine source about every tile.
    ///
    /// Adjacency counts are derived in a second pass, once every mine has been placed. All tiles start hidden.
    ///
    /// # Usage
    /// ```
    /// # use minegrid::{Board, FieldCoordinates};
    /// // A single mine in the top left corner.
    /// let board = Board::generate(3, 3, &mut |location: FieldCoordinates| location == [0, 0]).unwrap();
    /// assert!(board[[0, 0]].is_mine());
    /// assert_eq!(board[[1, 1]].adjacent_mines(), Some(1));
    /// assert_eq!(board[[2, 2]].adjacent_mines(), Some(0));
    /// ```
    ///
    /// # Errors
    /// Fails if either dimension is zero, or if the area is too large to be stored.
    #[tracing::instrument(level = "debug", skip(mines))]
    pub fn generate<M>(width: usize, height: usize, mines: &mut M) -> Result<Self, BoardError>
    where M: MineSource + ?Sized {
        let dimensions = field_dimensions(width, height)?;
        let area = field_area(dimensions)?;
        let storage = (0..area)
            .map(|index| {
                if mines.place_mine(coordinates_of(index, width)) {
                    Tile::hidden(TileKind::Mine)
                } else {
                    Tile::hidden(TileKind::default())
                }
            })
            .collect();
        let mut board = Self { dimensions, storage };

        for index in 0..area {
            if board.storage[index].is_safe() {
                let adjacent_mines = board.count_adjacent_mines(coordinates_of(index, width));
                board.storage[index] = Tile::hidden(TileKind::Safe { adjacent_mines });
            }
        }
        tracing::debug!(mines = board.mine_count(), area, "generated board");
        Ok(board)
    }
    /// Generates a board with mines placed by the thread-local random number generator, with the default mine probability.
    ///
    /// # Errors
    /// Fails if either dimension is zero, or if the area is too large to be stored.
    #[cfg(all(feature = "generation", feature = "std"))]
    pub fn random(width: usize, height: usize) -> Result<Self, BoardError> {
        Self::generate(width, height, &mut crate::RandomMines::new(rand::thread_rng()))
    }
    /// Creates a board with the specified dimensions from the specified tiles, given in row-major order.
    ///
    /// Every adjacency count is checked against the mines around it, and every revealed tile without adjacent mines must have its whole orthogonal neighborhood revealed, just like a cascade leaves it. A board built this way upholds the same guarantees as a generated one and reached through reveals.
    ///
    /// # Errors
    /// Fails if the area overflows, if the number of tiles doesn't match the area, if any safe tile carries a wrong adjacency count, or if a revealed clearing has hidden tiles next to it.
    pub fn from_tiles(dimensions: FieldDimensions, tiles: Vec<Tile>) -> Result<Self, BoardError> {
        let expected = field_area(dimensions)?;
        if tiles.len() != expected {
            return Err(BoardError::StorageSize { expected, actual: tiles.len() });
        }
        let board = Self { dimensions, storage: tiles };
        for (location, tile) in board.cells() {
            if let Some(found) = tile.adjacent_mines() {
                let expected = board.count_adjacent_mines(location);
                if found != expected {
                    return Err(BoardError::InconsistentCount { location, expected, found });
                }
            }
            if tile.is_revealed() && tile.cascades() {
                let hidden = CASCADE_OFFSETS
                    .iter()
                    .map(|&by| offset(location, by))
                    .find(|&there| board.probe(there).tile().is_some_and(|tile| !tile.is_revealed()));
                if let Some(neighbor) = hidden {
                    return Err(BoardError::UnfinishedClearing { location, neighbor });
                }
            }
        }
        Ok(board)
    }

    /// Returns the width and height of the board.
    #[inline(always)]
    pub const fn dimensions(&self) -> FieldDimensions {
        self.dimensions
    }
    /// Returns the number of columns.
    #[inline(always)]
    pub const fn width(&self) -> usize {
        self.dimensions[0].get()
    }
    /// Returns the number of rows.
    #[inline(always)]
    pub const fn height(&self) -> usize {
        self.dimensions[1].get()
    }
    /// Returns all tiles in row-major order.
    #[inline(always)]
    pub fn tiles(&self) -> &[Tile] {
        &self.storage
    }

    /// Returns the storage index of the tile at the specified coordinates, or `None` if they are out of bounds.
    #[inline]
    pub fn index_of(&self, location: FieldCoordinates) -> Option<usize> {
        let x = usize::try_from(location[0]).ok()?;
        let y = usize::try_from(location[1]).ok()?;
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(y * self.width() + x)
    }
    /// Returns the tile at the specified coordinates, or `None` if they are out of bounds.
    #[inline]
    pub fn get(&self, location: FieldCoordinates) -> Option<&Tile> {
        self.index_of(location).map(|index| &self.storage[index])
    }
    /// Looks up the specified coordinates, producing `Probe::OutOfBounds` instead of failing when they are off the board.
    #[inline]
    pub fn probe(&self, location: FieldCoordinates) -> Probe {
        self.get(location).copied().into()
    }

    /// Counts all mines around a spot.
    ///
    /// All directly and diagonally adjacent tiles are considered. Neighbors outside of the board count as empty. If the tile is a mine, the tile itself isn't counted.
    #[allow(clippy::cast_possible_truncation)] // At most 8.
    pub fn count_adjacent_mines(&self, location: FieldCoordinates) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&by| self.probe(offset(location, by)).is_mine())
            .count() as u8
    }
    /// Returns the number of mines on the board.
    #[must_use = "traversing the entire board is expensive"]
    pub fn mine_count(&self) -> usize {
        self.storage.iter().filter(|tile| tile.is_mine()).count()
    }
    /// Returns the number of tiles which have been revealed.
    #[must_use = "traversing the entire board is expensive"]
    pub fn count_revealed(&self) -> usize {
        self.storage.iter().filter(|tile| tile.is_revealed()).count()
    }

    /// Reveals the tile at the specified coordinates and reports what happened.
    ///
    /// - Coordinates outside of the board and tiles which are already revealed are left alone, which makes this idempotent.
    /// - Mines and tiles with a number are revealed on their own.
    /// - Tiles without adjacent mines spread the reveal up, left, right and down, transitively, over the whole clearing and its numbered shore.
    ///
    /// # Usage
    /// ```
    /// # use minegrid::{Board, FieldCoordinates, RevealOutcome};
    /// let mut board = Board::generate(5, 5, &mut |_: FieldCoordinates| false).unwrap();
    /// assert!(matches!(board.reveal([2, 2]), RevealOutcome::Clearing(n) if n.get() == 25));
    /// assert_eq!(board.reveal([2, 2]), RevealOutcome::AlreadyRevealed);
    /// assert_eq!(board.reveal([-1, -1]), RevealOutcome::OutOfBounds);
    /// ```
    pub fn reveal(&mut self, location: FieldCoordinates) -> RevealOutcome {
        let Some(index) = self.index_of(location) else {
            tracing::trace!(?location, "reveal outside of the board");
            return RevealOutcome::OutOfBounds;
        };
        let tile = &mut self.storage[index];
        if !tile.reveal() {
            return RevealOutcome::AlreadyRevealed;
        }
        match tile.kind() {
            TileKind::Mine => {
                tracing::debug!(?location, "revealed a mine");
                RevealOutcome::Mine
            },
            TileKind::Safe { adjacent_mines } => match NonZeroU8::new(adjacent_mines) {
                Some(count) => RevealOutcome::Number(count),
                None => {
                    let revealed = self.open_clearing(location);
                    tracing::debug!(?location, revealed, "opened a clearing");
                    // The anchor itself was revealed above.
                    RevealOutcome::Clearing(NonZeroUsize::MIN.saturating_add(revealed))
                },
            },
        }
    }
    /// Spreads a reveal from an already revealed tile without adjacent mines. Returns the number of tiles newly revealed, not counting the anchor.
    fn open_clearing(&mut self, anchor: FieldCoordinates) -> usize {
        // A heap-based stack instead of the thread stack, so that huge clearings cannot overflow it.
        // A tile is marked revealed before it is pushed, so every tile enters the stack at most once.
        let mut stack = Vec::<FieldCoordinates>::with_capacity(16);
        stack.push(anchor);
        let mut revealed = 0_usize;
        while let Some(here) = stack.pop() {
            for by in CASCADE_OFFSETS {
                let there = offset(here, by);
                let Some(index) = self.index_of(there) else { continue };
                let tile = &mut self.storage[index];
                if tile.reveal() {
                    revealed += 1;
                    if tile.cascades() {
                        stack.push(there);
                    }
                }
            }
        }
        revealed
    }

    /// Returns an iterator over a single row.
    ///
    /// # Panics
    /// Panics if the specified row is out of range.
    #[inline(always)]
    pub fn row(&self, row: usize) -> RowIter<'_> {
        RowIter::new(self, row)
    }
    /// Returns an iterator over the board's rows, top to bottom.
    #[inline(always)]
    pub fn rows(&self) -> BoardRowsIter<'_> {
        BoardRowsIter::new(self)
    }
    /// Returns an iterator over every tile along with its coordinates, in row-major order.
    #[inline(always)]
    pub fn cells(&self) -> Cells<'_> {
        Cells::new(self)
    }
}
impl Index<FieldCoordinates> for Board {
    type Output = Tile;
    /// Returns the tile at the column `index[0]` and row `index[1]`, both starting at zero.
    ///
    /// # Panics
    /// Index checking is enabled for this method. For a version which returns an `Option` instead of panicking if the index is out of bounds, see `get`.
    #[inline(always)]
    fn index(&self, location: FieldCoordinates) -> &Self::Output {
        self.get(location).expect("index out of bounds")
    }
}

#[cfg(feature = "serialization")]
#[derive(Serialize, Deserialize)]
struct RawBoard {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}
#[cfg(feature = "serialization")]
impl TryFrom<RawBoard> for Board {
    type Error = BoardError;
    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Self::from_tiles(field_dimensions(raw.width, raw.height)?, raw.tiles)
    }
}
#[cfg(feature = "serialization")]
impl From<Board> for RawBoard {
    fn from(board: Board) -> Self {
        Self {
            width: board.width(),
            height: board.height(),
            tiles: board.storage,
        }
    }
}
