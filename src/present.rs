//! Deriving what a tile looks like from its state.

use core::num::NonZeroU8;
use crate::{Tile, TileKind, GameConfig};

/// An opaque RGB color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}
impl Color {
    /// Hidden tiles and revealed numbers.
    pub const NEUTRAL_GRAY: Self = Self::rgb(0x9e, 0x9e, 0x9e);
    /// Revealed mines.
    pub const RED: Self = Self::rgb(0xd3, 0x2f, 0x2f);
    /// Revealed tiles without adjacent mines.
    pub const DARK_BACKGROUND: Self = Self::rgb(0x21, 0x21, 0x21);
    /// Tile outlines.
    pub const BORDER: Self = Self::rgb(0x42, 0x42, 0x42);
    /// Adjacency numbers.
    pub const LABEL: Self = Self::rgb(0x0d, 0x0d, 0x0d);

    /// Creates a color from its channels.
    #[inline(always)]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Returns the fill color of a tile.
pub const fn tile_color(tile: &Tile) -> Color {
    if !tile.is_revealed() {
        return Color::NEUTRAL_GRAY;
    }
    match tile.kind() {
        TileKind::Mine => Color::RED,
        TileKind::Safe { adjacent_mines: 0 } => Color::DARK_BACKGROUND,
        TileKind::Safe { .. } => Color::NEUTRAL_GRAY,
    }
}

/// Returns the number drawn on a tile: the adjacency count of a revealed safe tile, unless it is zero.
pub const fn tile_label(tile: &Tile) -> Option<NonZeroU8> {
    if !tile.is_revealed() {
        return None;
    }
    match tile.adjacent_mines() {
        Some(count) => NonZeroU8::new(count),
        None => None,
    }
}

/// Everything needed to draw one tile.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TileAppearance {
    /// Color the tile rectangle is filled with.
    pub fill: Color,
    /// Color of the tile outline.
    pub border: Color,
    /// Width of the tile outline, in draw space.
    pub border_width: f32,
    /// The adjacency count to print over the tile, if any.
    pub label: Option<NonZeroU8>,
}

/// Derives the full appearance of a tile.
pub const fn appearance(tile: &Tile) -> TileAppearance {
    TileAppearance {
        fill: tile_color(tile),
        border: Color::BORDER,
        border_width: GameConfig::BORDER_WIDTH,
        label: tile_label(tile),
    }
}
