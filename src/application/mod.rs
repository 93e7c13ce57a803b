mod command;
mod game_state;

pub use command::Command;
pub use game_state::{DEFAULT_ANIMATION_FPS, GameState};
