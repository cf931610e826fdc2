//! Mapping between draw space and board coordinates.
//!
//! The same [`TileGeometry`] places tiles when drawing and resolves the pointer when hit-testing, so a tile is clicked exactly where it is drawn.

use crate::{Board, BoardError, FieldCoordinates, GameConfig};

/// A position in draw space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal position, growing to the right.
    pub x: f32,
    /// Vertical position, growing downwards.
    pub y: f32,
}
impl Point {
    /// Creates a point.
    #[inline(always)]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in draw space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Horizontal extent, to the right of `x`.
    pub width: f32,
    /// Vertical extent, below `y`.
    pub height: f32,
}
impl Rect {
    /// Returns the center of the rectangle.
    #[inline]
    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// How tiles are laid out in draw space: square tiles of one size, with the top left tile at the origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TileGeometry {
    tile_size: f32,
}
impl TileGeometry {
    /// Creates a geometry with the specified tile edge length.
    ///
    /// # Errors
    /// Fails if the size is not a finite, positive number.
    pub fn new(tile_size: f32) -> Result<Self, BoardError> {
        if tile_size.is_finite() && tile_size > 0.0 {
            Ok(Self { tile_size })
        } else {
            tracing::warn!(tile_size, "rejected tile size");
            Err(BoardError::InvalidTileSize(tile_size))
        }
    }
    /// Returns the tile edge length.
    #[inline(always)]
    pub const fn tile_size(self) -> f32 {
        self.tile_size
    }
    /// Returns the position of the grid line in front of the column or row with the specified index.
    ///
    /// Tile `k` spans from `edge(k)` up to `edge(k + 1)`, so neighboring tiles share their edge exactly, whatever rounding the tile size brings along.
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    pub fn edge(self, index: isize) -> f32 {
        index as f32 * self.tile_size
    }
    /// Returns the rectangle the tile at the specified coordinates occupies.
    #[inline]
    pub fn tile_rect(self, location: FieldCoordinates) -> Rect {
        let [x, y] = location.map(|index| self.edge(index));
        let [right, bottom] = location.map(|index| self.edge(index.saturating_add(1)));
        Rect { x, y, width: right - x, height: bottom - y }
    }
    /// Returns `true` if the point lies on the tile at the specified coordinates.
    ///
    /// The left and top edges belong to the tile, while the right and bottom edges belong to its neighbors. The edges are the ones [`edge`][m_edge] places, so every point of the board lies on exactly one tile.
    ///
    /// [m_edge]: #method.edge "edge — position of a grid line"
    #[inline]
    pub fn tile_contains(self, location: FieldCoordinates, point: Point) -> bool {
        let [x, y] = location;
        (self.edge(x)..self.edge(x.saturating_add(1))).contains(&point.x)
            && (self.edge(y)..self.edge(y.saturating_add(1))).contains(&point.y)
    }
    /// Returns the size of the whole board in draw space.
    #[allow(clippy::cast_possible_wrap)] // Board dimensions never exceed isize::MAX.
    pub fn board_size(self, board: &Board) -> Point {
        Point::new(self.edge(board.width() as isize), self.edge(board.height() as isize))
    }
}
impl Default for TileGeometry {
    fn default() -> Self {
        Self { tile_size: GameConfig::DEFAULT_TILE_SIZE }
    }
}

/// A single sample of the pointer.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointerState {
    /// Where the cursor is, in draw space.
    pub position: Point,
    /// Whether the primary button is currently held down.
    pub primary_held: bool,
}

/// Returns the coordinates of the tile under the point, or `None` if the point is off the board.
///
/// # Usage
/// ```
/// # use minegrid::{hit_test, Board, FieldCoordinates, Point, TileGeometry};
/// let board = Board::generate(4, 4, &mut |_: FieldCoordinates| false).unwrap();
/// let geometry = TileGeometry::new(32.0).unwrap();
/// assert_eq!(hit_test(&board, geometry, Point::new(31.0, 31.0)), Some([0, 0]));
/// assert_eq!(hit_test(&board, geometry, Point::new(32.0, 32.0)), Some([1, 1]));
/// assert_eq!(hit_test(&board, geometry, Point::new(128.0, 5.0)), None);
/// ```
pub fn hit_test(board: &Board, geometry: TileGeometry, point: Point) -> Option<FieldCoordinates> {
    board
        .cells()
        .map(|(location, _)| location)
        .find(|&location| geometry.tile_contains(location, point))
}

/// Returns the tile the pointer targets this frame: the one under the cursor, as long as the primary button is held.
#[inline]
pub fn target(board: &Board, geometry: TileGeometry, pointer: PointerState) -> Option<FieldCoordinates> {
    if pointer.primary_held {
        hit_test(board, geometry, pointer.position)
    } else {
        None
    }
}
