use log::{debug, trace};

use crate::application::Command;
use crate::domain::GridEngine;

/// Animation frames per second when no rate is configured
pub const DEFAULT_ANIMATION_FPS: f32 = 60.0;

/// Most animation frames caught up in one rendered frame, so a stall does
/// not replay a burst of frames
const MAX_CATCH_UP: u32 = 4;

/// GameState is the session driven by the frame loop.
/// It owns the single engine and serializes every mutation onto it.
pub struct GameState {
    pub engine: GridEngine,
    /// Animation frames since the session started
    pub frame: u64,
    pub animation_fps: f32,
    tick_timer: f32,
}

impl GameState {
    pub fn new(engine: GridEngine) -> Self {
        Self {
            engine,
            frame: 0,
            animation_fps: DEFAULT_ANIMATION_FPS,
            tick_timer: 0.0,
        }
    }

    /// Set the animation frame rate (builder pattern)
    pub fn with_animation_fps(mut self, fps: f32) -> Self {
        self.animation_fps = fps.clamp(1.0, 240.0);
        self
    }

    /// Apply one player command
    pub fn apply(mut self, command: Command) -> Self {
        match command {
            Command::Move(direction) => {
                if self.engine.shift(direction) {
                    debug!(
                        "moved {} (score {}, {} tiles)",
                        direction.name(),
                        self.engine.score(),
                        self.engine.grid().tile_count()
                    );
                } else {
                    trace!("move {} changed nothing", direction.name());
                }
            }
            Command::Reset => self.engine.reset(),
        }
        self
    }

    /// Advance animations by exactly one frame
    pub fn tick(mut self) -> Self {
        self.engine.animations_mut().tick();
        self.frame += 1;
        self
    }

    /// Accumulate real time and run one animation frame per elapsed interval,
    /// so animation speed does not follow the display refresh rate
    pub fn advance(mut self, delta_time: f32) -> Self {
        let interval = 1.0 / self.animation_fps;
        self.tick_timer += delta_time.max(0.0);

        let mut steps = 0;
        while self.tick_timer >= interval && steps < MAX_CATCH_UP {
            self = self.tick();
            self.tick_timer -= interval;
            steps += 1;
        }
        if steps == MAX_CATCH_UP {
            self.tick_timer = self.tick_timer.min(interval);
        }
        self
    }
}
