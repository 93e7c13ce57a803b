mod grid;
mod animation;
mod spawner;
mod engine;
#[cfg(test)]
mod arbitrary;

pub use grid::{Grid, Position, Direction, GRID_SIZE};
pub use animation::{Animation, AnimationKind, AnimationTracker, SPAWN_TICKS, SLIDE_TICKS, MERGE_TICKS};
pub use spawner::{TileSpawner, RandomSpawner, SequenceSpawner};
pub use engine::{GridEngine, GameStatus, WIN_VALUE};
