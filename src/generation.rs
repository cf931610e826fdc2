//! Sources of mine placements.
//!
//! Board generation never reaches for randomness by itself: it asks a [`MineSource`] about every tile instead. Production code hands it a [`RandomMines`], while tests hand it a closure describing a fixed layout.

use crate::FieldCoordinates;

/// Decides which tiles receive a mine during generation.
///
/// Called exactly once per tile, in row-major order (rows top to bottom, tiles left to right within a row).
pub trait MineSource {
    /// Returns `true` if the tile at the specified location gets a mine.
    fn place_mine(&mut self, location: FieldCoordinates) -> bool;
}
impl<F> MineSource for F
where F: FnMut(FieldCoordinates) -> bool {
    #[inline(always)]
    fn place_mine(&mut self, location: FieldCoordinates) -> bool {
        self(location)
    }
}

/// Places a mine on every tile independently with a fixed probability.
///
/// The probability is always [`GameConfig::MINE_PROBABILITY`][crate::GameConfig::MINE_PROBABILITY]; there are no difficulty levels.
/// ```compile_fail
/// # use minegrid::RandomMines;
/// let mines = RandomMines::with_probability(rand::thread_rng(), 0.5);
/// ```
#[cfg(feature = "generation")]
#[derive(Clone, Debug)]
pub struct RandomMines<R> {
    rng: R,
    probability: f64,
}
#[cfg(feature = "generation")]
impl<R: rand::Rng> RandomMines<R> {
    /// Uses the default mine probability of one in ten.
    #[inline]
    pub fn new(rng: R) -> Self {
        Self { rng, probability: crate::GameConfig::MINE_PROBABILITY }
    }
    /// Uses the specified mine probability. Only for pinning down degenerate layouts in tests.
    #[cfg(test)]
    pub(crate) fn with_probability(rng: R, probability: f64) -> Self {
        debug_assert!((0.0..=1.0).contains(&probability));
        Self { rng, probability }
    }
    /// Returns the probability of a tile getting a mine.
    #[inline(always)]
    pub const fn probability(&self) -> f64 {
        self.probability
    }
}
#[cfg(feature = "generation")]
impl<R: rand::Rng> MineSource for RandomMines<R> {
    #[inline]
    fn place_mine(&mut self, _: FieldCoordinates) -> bool {
        self.rng.gen_bool(self.probability)
    }
}

#[cfg(all(test, feature = "generation"))]
mod tests {
    use super::*;
    use rand::{rngs::{mock::StepRng, StdRng}, SeedableRng};

    #[test]
    #[allow(clippy::float_cmp)]
    fn default_probability_is_one_in_ten() {
        let mines = RandomMines::new(StdRng::seed_from_u64(0));
        assert_eq!(mines.probability(), 0.1);
        assert_eq!(mines.probability(), crate::GameConfig::MINE_PROBABILITY);
    }

    #[test]
    fn default_probability_places_about_a_tenth() {
        let mut mines = RandomMines::new(StdRng::seed_from_u64(42));
        let placed = (0..10_000).filter(|&i| mines.place_mine([i % 100, i / 100])).count();
        assert!((850..=1150).contains(&placed), "{placed} mines out of 10000");
    }

    #[test]
    fn zero_probability_never_places_mines() {
        let mut mines = RandomMines::with_probability(StepRng::new(0, 1), 0.0);
        assert!((0..32).all(|x| !mines.place_mine([x, 0])));
    }

    #[test]
    fn certain_probability_always_places_mines() {
        let mut mines = RandomMines::with_probability(StepRng::new(u64::MAX, 0), 1.0);
        assert!((0..32).all(|x| mines.place_mine([x, 0])));
    }

    #[test]
    fn closures_are_mine_sources() {
        let mut diagonal = |[x, y]: FieldCoordinates| x == y;
        assert!(diagonal.place_mine([3, 3]));
        assert!(!diagonal.place_mine([3, 2]));
    }
}
