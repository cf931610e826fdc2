//! The capabilities a frontend provides, and the per-frame loop which ties them to a board.
//!
//! The library never draws, reads input or keeps time by itself. A frontend implements [`Renderer`], [`PointerInput`] and [`FrameScheduler`] for whatever platform it runs on, and [`Session`] performs one sample → reveal → render cycle per frame.

use core::ops::ControlFlow;
use alloc::string::ToString;
use crate::{
    appearance, target,
    Board, Color, FieldCoordinates, GameConfig, Point, PointerState, Rect, RevealOutcome, TileGeometry,
};

/// Horizontal alignment of text relative to its anchor point.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextAlign {
    /// The text starts at the anchor.
    Left,
    /// The text is centered on the anchor.
    Center,
    /// The text ends at the anchor.
    Right,
}

/// A font specification passed through to the renderer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Font {
    /// Font family name, as understood by the renderer.
    pub family: &'static str,
    /// Font size, in draw space.
    pub size: f32,
    /// Horizontal alignment relative to the anchor point.
    pub align: TextAlign,
}

/// A drawing surface. Coordinates are in draw space, the same units as [`TileGeometry`].
pub trait Renderer {
    /// Fills a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Outlines a rectangle.
    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32);
    /// Draws text anchored at the specified point, aligned horizontally according to the font and centered vertically.
    fn fill_text(&mut self, text: &str, at: Point, font: &Font, color: Color);
}

/// A source of pointer samples.
///
/// Sampled exactly once per frame. Input is level-triggered: holding the button over a tile keeps targeting it every frame, which is harmless since revealing is idempotent.
pub trait PointerInput {
    /// Returns the current state of the pointer.
    fn sample(&mut self) -> PointerState;
}

/// Invokes a callback once per displayed frame until it asks to stop.
pub trait FrameScheduler {
    /// Runs frames until `on_frame` returns `ControlFlow::Break` or the scheduler decides to stop.
    fn run(&mut self, on_frame: &mut dyn FnMut() -> ControlFlow<()>);
}

/// Draws every tile of the board: its fill, its border and, for revealed numbers, its adjacency count.
pub fn draw_board<R: Renderer + ?Sized>(board: &Board, geometry: TileGeometry, renderer: &mut R) {
    for (location, tile) in board.cells() {
        let rect = geometry.tile_rect(location);
        let look = appearance(tile);
        renderer.fill_rect(rect, look.fill);
        renderer.stroke_rect(rect, look.border, look.border_width);
        if let Some(count) = look.label {
            renderer.fill_text(&count.to_string(), rect.center(), &GameConfig::LABEL_FONT, Color::LABEL);
        }
    }
}

/// A board together with the geometry it is drawn with.
#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    geometry: TileGeometry,
}
impl Session {
    /// Starts a session on the specified board.
    #[inline]
    pub const fn new(board: Board, geometry: TileGeometry) -> Self {
        Self { board, geometry }
    }
    /// Returns the board.
    #[inline(always)]
    pub const fn board(&self) -> &Board {
        &self.board
    }
    /// Returns the geometry tiles are drawn with.
    #[inline(always)]
    pub const fn geometry(&self) -> TileGeometry {
        self.geometry
    }
    /// Ends the session, handing back the board.
    #[inline(always)]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Runs one frame: samples the pointer once, reveals the tile it targets, if any, and redraws the board.
    ///
    /// Returns the targeted tile along with the outcome of revealing it.
    pub fn on_frame<I, R>(&mut self, input: &mut I, renderer: &mut R) -> Option<(FieldCoordinates, RevealOutcome)>
    where I: PointerInput + ?Sized,
          R: Renderer + ?Sized {
        let pointer = input.sample();
        let hit = target(&self.board, self.geometry, pointer).map(|location| {
            let outcome = self.board.reveal(location);
            tracing::trace!(?location, ?outcome, "frame reveal");
            (location, outcome)
        });
        draw_board(&self.board, self.geometry, renderer);
        hit
    }
    /// Hands the frame loop to the scheduler, running [`on_frame`][m_on_frame] for every frame it schedules.
    ///
    /// [m_on_frame]: #method.on_frame "on_frame — runs one sample, reveal and render cycle"
    pub fn run<S, I, R>(&mut self, scheduler: &mut S, input: &mut I, renderer: &mut R)
    where S: FrameScheduler + ?Sized,
          I: PointerInput + ?Sized,
          R: Renderer + ?Sized {
        let mut frames = 0_u64;
        scheduler.run(&mut || {
            frames += 1;
            self.on_frame(&mut *input, &mut *renderer);
            ControlFlow::Continue(())
        });
        tracing::debug!(frames, revealed = self.board.count_revealed(), "frame loop finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{string::String, vec, vec::Vec};

    #[derive(Debug, PartialEq)]
    enum Command {
        Fill(Rect, Color),
        Stroke(Rect, Color),
        Text(String, Point),
    }

    #[derive(Default)]
    struct Recorder(Vec<Command>);
    impl Renderer for Recorder {
        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.0.push(Command::Fill(rect, color));
        }
        fn stroke_rect(&mut self, rect: Rect, color: Color, _: f32) {
            self.0.push(Command::Stroke(rect, color));
        }
        fn fill_text(&mut self, text: &str, at: Point, _: &Font, _: Color) {
            self.0.push(Command::Text(text.into(), at));
        }
    }

    struct Scripted(Vec<PointerState>);
    impl PointerInput for Scripted {
        fn sample(&mut self) -> PointerState {
            if self.0.is_empty() { PointerState::default() } else { self.0.remove(0) }
        }
    }

    struct Frames(usize);
    impl FrameScheduler for Frames {
        fn run(&mut self, on_frame: &mut dyn FnMut() -> ControlFlow<()>) {
            for _ in 0..self.0 {
                if on_frame().is_break() {
                    break;
                }
            }
        }
    }

    fn held(x: f32, y: f32) -> PointerState {
        PointerState { position: Point::new(x, y), primary_held: true }
    }

    fn session() -> Session {
        // * 1
        // 1 1
        let board = Board::generate(2, 2, &mut |location: FieldCoordinates| location == [0, 0]).unwrap();
        Session::new(board, TileGeometry::new(10.0).unwrap())
    }

    #[test]
    fn draws_fill_and_border_for_every_tile() {
        let session = session();
        let mut recorder = Recorder::default();
        draw_board(session.board(), session.geometry(), &mut recorder);
        assert_eq!(recorder.0.len(), 8);
        assert_eq!(
            recorder.0[2],
            Command::Fill(Rect { x: 10.0, y: 0.0, width: 10.0, height: 10.0 }, Color::NEUTRAL_GRAY),
        );
        assert!(matches!(recorder.0[3], Command::Stroke(_, Color::BORDER)));
    }

    #[test]
    fn frame_reveals_the_held_tile_and_labels_it() {
        let mut session = session();
        let mut recorder = Recorder::default();
        let hit = session.on_frame(&mut Scripted(vec![held(15.0, 5.0)]), &mut recorder);
        assert_eq!(hit, Some(([1, 0], RevealOutcome::Number(core::num::NonZeroU8::new(1).unwrap()))));
        assert!(recorder.0.contains(&Command::Text("1".into(), Point::new(15.0, 5.0))));
    }

    #[test]
    fn released_pointer_reveals_nothing() {
        let mut session = session();
        let pointer = PointerState { position: Point::new(5.0, 5.0), primary_held: false };
        assert_eq!(session.on_frame(&mut Scripted(vec![pointer]), &mut Recorder::default()), None);
        assert_eq!(session.board().count_revealed(), 0);
    }

    #[test]
    fn scheduler_drives_one_sample_per_frame() {
        let mut session = session();
        let mut input = Scripted(vec![held(5.0, 5.0), held(15.0, 15.0), held(15.0, 15.0)]);
        session.run(&mut Frames(2), &mut input, &mut Recorder::default());
        assert_eq!(input.0.len(), 1);
        let board = session.into_board();
        assert!(board[[0, 0]].is_revealed());
        assert!(board[[1, 1]].is_revealed());
        assert_eq!(board.count_revealed(), 2);
    }
}
