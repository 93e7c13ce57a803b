use log::{info, trace};

use super::{
    AnimationKind, AnimationTracker, Direction, Grid, GRID_SIZE, Position, RandomSpawner, TileSpawner,
};

/// Tile value that wins the game
pub const WIN_VALUE: u32 = 2048;

/// Number of tiles placed on a fresh board
const STARTING_TILES: usize = 2;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    Playing,
    /// 2048 was reached; play may continue
    Won,
    /// No move changes the board; only a reset continues
    GameOver,
}

/// GridEngine owns the board, the score and the win/loss flags.
/// Every mutation records the matching animation events.
pub struct GridEngine {
    grid: Grid,
    score: u32,
    won: bool,
    game_over: bool,
    animations: AnimationTracker,
    spawner: Box<dyn TileSpawner>,
}

impl GridEngine {
    /// Start a new game with two random tiles
    pub fn new(spawner: Box<dyn TileSpawner>) -> Self {
        let mut engine = Self::from_grid(Grid::new(), spawner);
        engine.reset();
        engine
    }

    /// New game using `rand`, reproducible when a seed is given
    pub fn seeded(seed: Option<u64>) -> Self {
        let spawner = match seed {
            Some(seed) => RandomSpawner::seeded(seed),
            None => RandomSpawner::from_os_rng(),
        };
        Self::new(Box::new(spawner))
    }

    /// Continue from an existing board. No tiles are added and the
    /// game-over flag is only set by the next `check_game_over`.
    pub fn from_grid(grid: Grid, spawner: Box<dyn TileSpawner>) -> Self {
        Self {
            grid,
            score: 0,
            won: false,
            game_over: false,
            animations: AnimationTracker::new(),
            spawner,
        }
    }

    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn score(&self) -> u32 {
        self.score
    }

    pub const fn status(&self) -> GameStatus {
        if self.game_over {
            GameStatus::GameOver
        } else if self.won {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }

    /// Sticky for the whole game, even once it is over
    pub const fn has_won(&self) -> bool {
        self.won
    }

    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub const fn animations(&self) -> &AnimationTracker {
        &self.animations
    }

    pub fn animations_mut(&mut self) -> &mut AnimationTracker {
        &mut self.animations
    }

    /// Clear everything and seed a fresh board
    pub fn reset(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.won = false;
        self.game_over = false;
        self.animations.clear();
        for _ in 0..STARTING_TILES {
            self.spawn_tile();
        }
        info!("new game");
    }

    /// Place a 2 or a 4 in a random empty cell. Does nothing on a full board.
    pub fn spawn_tile(&mut self) {
        let empty = self.grid.empty_cells();
        if empty.is_empty() {
            return;
        }
        let (index, value) = self.spawner.choose(empty.len());
        let cell = empty[index];
        self.grid.set(cell, value);
        self.animations.record(AnimationKind::Spawn { cell });
        trace!("spawned {value} at {cell:?}");
    }

    /// Slide and merge every tile towards `direction`.
    ///
    /// Returns whether anything moved. A successful move spawns one tile and
    /// re-evaluates game over; once the game is over this always returns
    /// false without touching any state.
    pub fn shift(&mut self, direction: Direction) -> bool {
        if self.game_over {
            return false;
        }
        let moved = self.resolve(direction);
        if moved {
            self.spawn_tile();
            self.check_game_over();
        }
        moved
    }

    /// True, and the game ends, when the board is full and no two
    /// neighbouring cells match
    pub fn check_game_over(&mut self) -> bool {
        if !self.grid.is_full() || self.grid.has_equal_neighbors() {
            return false;
        }
        if !self.game_over {
            info!("game over with score {}", self.score);
        }
        self.game_over = true;
        true
    }

    /// Slides and merges without spawning.
    ///
    /// Lines are scanned from the cell next to the target edge outwards, so a
    /// tile only ever meets tiles that have already settled. A cell that
    /// absorbed a merge this move is not merged into again.
    fn resolve(&mut self, direction: Direction) -> bool {
        let mut moved = false;
        for line in 0..GRID_SIZE {
            let mut merged = [false; GRID_SIZE];
            for start in 1..GRID_SIZE {
                let value = self.grid.get(direction.cell(line, start));
                if value == 0 {
                    continue;
                }

                let mut k = start;
                while k > 0 && self.grid.get(direction.cell(line, k - 1)) == 0 {
                    let from = direction.cell(line, k);
                    let to = direction.cell(line, k - 1);
                    self.grid.set(to, value);
                    self.grid.set(from, 0);
                    self.animations.record(AnimationKind::Slide { from, to });
                    k -= 1;
                    moved = true;
                }

                if k == 0 || merged[k - 1] {
                    continue;
                }
                let target = direction.cell(line, k - 1);
                if self.grid.get(target) == value {
                    self.merge(direction.cell(line, k), target, value * 2);
                    merged[k - 1] = true;
                    moved = true;
                }
            }
        }
        moved
    }

    fn merge(&mut self, source: Position, target: Position, value: u32) {
        self.grid.set(target, value);
        self.grid.set(source, 0);
        self.score += value;
        self.animations.record(AnimationKind::Merge { cell: target, value });
        if value == WIN_VALUE && !self.won {
            self.won = true;
            info!("reached {WIN_VALUE} with score {}", self.score);
        }
    }
}
