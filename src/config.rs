//! Fixed game parameters.

use crate::{Font, TextAlign};

/// Default board parameters shared by the library and the demo frontend.
///
/// These are constants rather than settings: the board has exactly one size and one mine density.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct GameConfig;

impl GameConfig {
    /// Number of columns on the default board.
    pub const DEFAULT_WIDTH: usize = 16;
    /// Number of rows on the default board.
    pub const DEFAULT_HEIGHT: usize = 16;
    /// Edge length of a tile, in draw-space units.
    pub const DEFAULT_TILE_SIZE: f32 = 32.0;
    /// Probability that any single tile holds a mine.
    pub const MINE_PROBABILITY: f64 = 0.1;
    /// Line width of the border stroked around every tile.
    pub const BORDER_WIDTH: f32 = 1.0;
    /// Font used for adjacency numbers.
    pub const LABEL_FONT: Font = Font {
        family: "monospace",
        size: 20.0,
        align: TextAlign::Center,
    };
}
