// Domain layer - Core business logic
pub mod domain;

// Application layer - Use cases and coordination
pub mod application;

// Configuration loaded at startup
pub mod config;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Direction, GameStatus, Grid, GridEngine, Position};
pub use application::{Command, GameState};
pub use config::GameConfig;
