use std::ops::ControlFlow;

use anyhow::Result;
use clap::Parser;
use minegrid::{
    Board, Color, FieldCoordinates, Font, FrameScheduler, GameConfig, Point, PointerInput, PointerState,
    RandomMines, Rect, Renderer, Session, TileGeometry,
};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Plays scripted clicks on a Minesweeper board and prints the result.
#[derive(Parser, Debug)]
#[command(name = "minegrid", version)]
struct Args {
    /// Seed for mine placement; a fresh random board is generated without it
    #[arg(long)]
    seed: Option<u64>,
    /// Tile to click, as `column,row`; may be repeated
    #[arg(long = "click", value_parser = parse_click)]
    clicks: Vec<FieldCoordinates>,
}

fn parse_click(arg: &str) -> Result<FieldCoordinates, String> {
    let (x, y) = arg.split_once(',').ok_or_else(|| format!("expected `column,row`, got `{arg}`"))?;
    let parse = |part: &str| part.trim().parse::<isize>().map_err(|e| format!("bad coordinate `{part}`: {e}"));
    Ok([parse(x)?, parse(y)?])
}

/// Holds the primary button over the center of one tile per frame, then lets go.
struct ScriptedPointer {
    geometry: TileGeometry,
    clicks: std::vec::IntoIter<FieldCoordinates>,
}
impl PointerInput for ScriptedPointer {
    fn sample(&mut self) -> PointerState {
        match self.clicks.next() {
            Some(location) => {
                info!(?location, "click");
                PointerState { position: self.geometry.tile_rect(location).center(), primary_held: true }
            }
            None => PointerState::default(),
        }
    }
}

/// Runs a fixed number of frames back to back.
struct FixedFrames(usize);
impl FrameScheduler for FixedFrames {
    fn run(&mut self, on_frame: &mut dyn FnMut() -> ControlFlow<()>) {
        for _ in 0..self.0 {
            if on_frame().is_break() {
                break;
            }
        }
    }
}

/// Rasterizes draw commands into one character per tile.
struct TextRenderer {
    tile_size: f32,
    width: usize,
    cells: Vec<char>,
}
impl TextRenderer {
    fn new(board: &Board, geometry: TileGeometry) -> Self {
        Self {
            tile_size: geometry.tile_size(),
            width: board.width(),
            cells: vec!['#'; board.width() * board.height()],
        }
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn cell_mut(&mut self, at: Point) -> Option<&mut char> {
        let (x, y) = ((at.x / self.tile_size) as usize, (at.y / self.tile_size) as usize);
        if x >= self.width {
            return None;
        }
        self.cells.get_mut(y * self.width + x)
    }
}
impl Renderer for TextRenderer {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let glyph = match color {
            Color::RED => '*',
            Color::DARK_BACKGROUND => '.',
            _ => '#',
        };
        if let Some(cell) = self.cell_mut(Point::new(rect.x, rect.y)) {
            *cell = glyph;
        }
    }
    fn stroke_rect(&mut self, _: Rect, _: Color, _: f32) {}
    fn fill_text(&mut self, text: &str, at: Point, _: &Font, _: Color) {
        if let (Some(cell), Some(glyph)) = (self.cell_mut(at), text.chars().next()) {
            *cell = glyph;
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let (width, height) = (GameConfig::DEFAULT_WIDTH, GameConfig::DEFAULT_HEIGHT);
    let board = match args.seed {
        Some(seed) => Board::generate(width, height, &mut RandomMines::new(StdRng::seed_from_u64(seed)))?,
        None => Board::random(width, height)?,
    };
    info!(width, height, mines = board.mine_count(), "board ready");

    let geometry = TileGeometry::default();
    let mut renderer = TextRenderer::new(&board, geometry);
    let frames = args.clicks.len() + 1;
    let mut pointer = ScriptedPointer { geometry, clicks: args.clicks.into_iter() };
    let mut session = Session::new(board, geometry);
    session.run(&mut FixedFrames(frames), &mut pointer, &mut renderer);

    for row in renderer.cells.chunks(renderer.width) {
        println!("{}", row.iter().collect::<String>());
    }
    let board = session.into_board();
    let mines_revealed = board.tiles().iter().filter(|tile| tile.is_mine() && tile.is_revealed()).count();
    info!(revealed = board.count_revealed(), mines_revealed, "done");
    Ok(())
}
