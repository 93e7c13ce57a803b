use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Probability that a spawned tile is a 2 rather than a 4
pub const TWO_PROBABILITY: f64 = 0.9;

/// Source of the two random choices a spawn needs.
/// Swapping the implementation makes a game fully reproducible.
pub trait TileSpawner: Send {
    /// Pick an index into the `empty_cells` empty cells (row-major) and the
    /// value to place there. Only called with `empty_cells > 0`.
    fn choose(&mut self, empty_cells: usize) -> (usize, u32);
}

/// Uniform cell choice, 2 with 90% probability and 4 otherwise
pub struct RandomSpawner<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSpawner<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSpawner<StdRng> {
    /// Reproducible spawner for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Spawner seeded from operating system entropy
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng + Send> TileSpawner for RandomSpawner<R> {
    fn choose(&mut self, empty_cells: usize) -> (usize, u32) {
        let index = self.rng.random_range(0..empty_cells);
        let value = if self.rng.random_bool(TWO_PROBABILITY) { 2 } else { 4 };
        (index, value)
    }
}

/// Replays a fixed list of picks. Indices wrap around the number of empty
/// cells; once the list runs out every spawn is a 2 in the first empty cell.
#[derive(Clone, Debug, Default)]
pub struct SequenceSpawner {
    picks: VecDeque<(usize, u32)>,
}

impl SequenceSpawner {
    pub fn new(picks: impl IntoIterator<Item = (usize, u32)>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }
}

impl TileSpawner for SequenceSpawner {
    fn choose(&mut self, empty_cells: usize) -> (usize, u32) {
        let (index, value) = self.picks.pop_front().unwrap_or((0, 2));
        (index % empty_cells, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_spawner_stays_in_range() {
        let mut spawner = RandomSpawner::seeded(7);
        for empty in 1..=16 {
            for _ in 0..50 {
                let (index, value) = spawner.choose(empty);
                assert!(index < empty);
                assert!(value == 2 || value == 4);
            }
        }
    }

    #[test]
    fn test_random_spawner_mostly_twos() {
        let mut spawner = RandomSpawner::seeded(2048);
        let fours = (0..10_000).filter(|_| spawner.choose(16).1 == 4).count();
        // Expect about 1000
        assert!((700..1300).contains(&fours), "got {fours} fours");
    }

    #[test]
    fn test_same_seed_same_picks() {
        let mut a = RandomSpawner::seeded(99);
        let mut b = RandomSpawner::seeded(99);
        for empty in (1..=16).rev() {
            assert_eq!(a.choose(empty), b.choose(empty));
        }
    }

    #[test]
    fn test_sequence_spawner_wraps_and_falls_back() {
        let mut spawner = SequenceSpawner::new([(5, 4), (1, 2)]);
        assert_eq!(spawner.choose(3), (2, 4));
        assert_eq!(spawner.choose(3), (1, 2));
        assert_eq!(spawner.choose(3), (0, 2));
    }
}
