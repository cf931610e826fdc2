//! Iterators useful for traversing a board.
//!
//! Currently available:
//! - [`RowIter`][rowiter] — iterates over a single board row
//! - [`BoardRowsIter`][bri] — iterates over the rows of a board (each item is a [`RowIter`][rowiter])
//! - [`Cells`][cells] — iterates over every tile along with its coordinates, in row-major order
//!
//! [rowiter]: struct.RowIter.html "RowIter — iterates over a single board row"
//! [bri]: struct.BoardRowsIter.html "BoardRowsIter — an iterator over the rows of a board"
//! [cells]: struct.Cells.html "Cells — iterates over every tile along with its coordinates"

use core::{
    ops::{Range, Index},
    iter::{Enumerate, FusedIterator},
    slice,
};
use crate::{
    board::coordinates_of,
    Tile, Board, FieldCoordinates,
};

/// Iterates over a single board row.
///
/// Can also be indexed to pull arbitrary tiles from the row, regardless of the iterator state.
///
/// # Usage
/// ```
/// # use minegrid::{Board, FieldCoordinates};
/// let board = Board::generate(9, 4, &mut |location: FieldCoordinates| location == [8, 3]).unwrap();
/// let mut rowiter = board.row(3); // Create an iterator over the fourth row
/// let mine_tile = rowiter.nth(8) // Find the ninth element in the row
///     .unwrap();
/// assert!(mine_tile.is_mine());
/// ```
#[derive(Clone, Debug)]
pub struct RowIter<'b> {
    tiles: &'b [Tile],
    row: usize,
    index: Range<usize>,
}
impl<'b> RowIter<'b> {
    /// Creates an iterator over the specified row of the specified board.
    ///
    /// # Panics
    /// Panics if the row is out of range.
    #[inline]
    pub fn new(board: &'b Board, row: usize) -> Self {
        let width = board.width();
        assert!(row < board.height(), "row {} is out of range for a board with {} rows", row, board.height());
        Self {
            tiles: &board.tiles()[row * width..(row + 1) * width],
            row,
            index: 0..width,
        }
    }
    /// Returns the tile at the specified column, or `None` if such a column doesn't exist.
    #[inline(always)]
    pub fn get(&self, column: usize) -> Option<&'b Tile> {
        self.tiles.get(column)
    }
    /// Returns the index of the row this iterator walks.
    #[inline(always)]
    pub const fn row(&self) -> usize {
        self.row
    }
}
impl<'b> Iterator for RowIter<'b> {
    type Item = &'b Tile;
    fn next(&mut self) -> Option<Self::Item> {
        let column = self.index.next()?;
        self.tiles.get(column)
    }
    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}
impl DoubleEndedIterator for RowIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let column = self.index.next_back()?;
        self.tiles.get(column)
    }
}
impl ExactSizeIterator for RowIter<'_> {
    /// Returns the remaining amount of tiles to iterate upon.
    #[inline(always)]
    fn len(&self) -> usize {
        self.index.end - self.index.start
    }
}
impl FusedIterator for RowIter<'_> {}
impl Index<usize> for RowIter<'_> {
    type Output = Tile;
    /// Returns the tile at the specified column, allowing you to write `board.row(y)[x]`.
    #[inline(always)]
    fn index(&self, column: usize) -> &Tile {
        &self.tiles[column]
    }
}

/// An iterator over the rows of a board.
///
/// # Usage
/// ```
/// # use minegrid::{Board, FieldCoordinates};
/// let board = Board::generate(9, 4, &mut |location: FieldCoordinates| location == [8, 3]).unwrap();
/// let row_with_mine = board.rows()
///     .position(|mut row| row.any(|tile| tile.is_mine()));
/// assert_eq!(row_with_mine, Some(3));
/// ```
#[derive(Clone, Debug)]
pub struct BoardRowsIter<'b> {
    board: &'b Board,
    index: Range<usize>,
}
impl<'b> BoardRowsIter<'b> {
    /// Returns an iterator over the specified board's rows.
    #[inline(always)]
    pub fn new(board: &'b Board) -> Self {
        Self { board, index: 0..board.height() }
    }
}
impl<'b> Iterator for BoardRowsIter<'b> {
    type Item = RowIter<'b>;
    fn next(&mut self) -> Option<Self::Item> {
        self.index.next().map(|row| self.board.row(row))
    }
    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}
impl DoubleEndedIterator for BoardRowsIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.index.next_back().map(|row| self.board.row(row))
    }
}
impl ExactSizeIterator for BoardRowsIter<'_> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.index.end - self.index.start
    }
}
impl FusedIterator for BoardRowsIter<'_> {}

/// Iterates over every tile of a board along with its coordinates, rows top to bottom and tiles left to right within a row.
#[derive(Clone, Debug)]
pub struct Cells<'b> {
    width: usize,
    tiles: Enumerate<slice::Iter<'b, Tile>>,
}
impl<'b> Cells<'b> {
    /// Returns an iterator over the specified board's tiles.
    #[inline(always)]
    pub fn new(board: &'b Board) -> Self {
        Self { width: board.width(), tiles: board.tiles().iter().enumerate() }
    }
}
impl<'b> Iterator for Cells<'b> {
    type Item = (FieldCoordinates, &'b Tile);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (index, tile) = self.tiles.next()?;
        Some((coordinates_of(index, self.width), tile))
    }
    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tiles.size_hint()
    }
}
impl ExactSizeIterator for Cells<'_> {}
impl FusedIterator for Cells<'_> {}
