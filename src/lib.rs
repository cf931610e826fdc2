//! The board model of a Minesweeper game: mine field generation, adjacency counts, cascading reveals and pointer hit-testing.
//!
//! A frontend owns the platform side of things (drawing, reading the pointer, scheduling frames) by implementing [`Renderer`], [`PointerInput`] and [`FrameScheduler`]. Everything with actual game logic lives here:
//! - [`Board`] generates a mine field from a [`MineSource`], derives adjacency counts and reveals tiles, flood-filling over clearings;
//! - [`hit_test`] and [`target`] map a pointer position onto the tile drawn under it;
//! - [`tile_color`], [`tile_label`] and [`appearance`] describe how a tile should look;
//! - [`Session`] runs the sample → reveal → render cycle once per frame.
//!
//! # Feature gates
//! - `std` — enable a dependency on the hosted standard library (**enabled by default**)
//!
//!   Without this feature, the crate only depends on `core` and `alloc`, allowing it to run in a freestanding environment.
//!
//! - `generation` — enable random generation (**enabled by default**)
//!
//!   Enables the dependency on `rand`, used by [`RandomMines`] and [`Board::random`]. Disable to remove said dependency if you'd like to place mines with your own [`MineSource`].
//!
//! - `serialization` — enable support for board serialization (**enabled by default**, disable to speed up compilation)
//!
//!   Enables the dependency on `serde` and its derive macros. Deserialized boards are validated exactly like [`Board::from_tiles`] validates them.
//!
//! - `cli` — build the `minegrid` demo binary, which plays scripted clicks on a text renderer

#![warn(missing_docs, clippy::pedantic, clippy::cargo, clippy::nursery)]
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

mod board;
pub use board::*;
mod config;
pub use config::*;
mod error;
pub use error::*;
mod frontend;
pub use frontend::*;
mod generation;
pub use generation::*;
mod hit;
pub use hit::*;
pub mod iter;
pub use iter::*;
mod present;
pub use present::*;
mod tile;
pub use tile::*;
