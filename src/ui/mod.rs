mod button;

pub use button::Button;

// Layout is computed from the current window size so resizing stays centred
use macroquad::prelude::{Color, screen_height, screen_width};

use crate::domain::{GRID_SIZE, Position};

pub const TILE_SIZE: f32 = 80.0;
pub const GRID_PADDING: f32 = 10.0;
/// Distance from the top of the window to the board
pub const BOARD_TOP: f32 = 100.0;
pub const BOARD_SIZE: f32 = GRID_SIZE as f32 * TILE_SIZE + (GRID_SIZE as f32 + 1.0) * GRID_PADDING;

pub const FONT_SIZE: f32 = 36.0;
pub const SMALL_FONT_SIZE: f32 = 24.0;

pub const SCORE_PANEL: (f32, f32, f32, f32) = (20.0, 20.0, 160.0, 60.0);
pub const BUTTON_WIDTH: f32 = 140.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

pub const BACKGROUND_COLOR: Color = Color::new(40.0 / 255.0, 44.0 / 255.0, 52.0 / 255.0, 1.0);
pub const BOARD_COLOR: Color = Color::new(50.0 / 255.0, 54.0 / 255.0, 62.0 / 255.0, 1.0);
pub const EMPTY_TILE_COLOR: Color = Color::new(60.0 / 255.0, 64.0 / 255.0, 72.0 / 255.0, 1.0);
pub const TEXT_COLOR: Color = Color::new(220.0 / 255.0, 223.0 / 255.0, 228.0 / 255.0, 1.0);
pub const MUTED_TEXT_COLOR: Color = Color::new(171.0 / 255.0, 178.0 / 255.0, 191.0 / 255.0, 1.0);
pub const WIN_TEXT_COLOR: Color = Color::new(152.0 / 255.0, 195.0 / 255.0, 121.0 / 255.0, 1.0);

/// X position of the board's left edge, centred horizontally
pub fn board_x() -> f32 {
    ((screen_width() - BOARD_SIZE) / 2.0).max(0.0)
}

/// Top-left corner of the tile slot at `pos`
pub fn tile_origin(pos: Position) -> (f32, f32) {
    tile_origin_from(board_x(), BOARD_TOP, pos)
}

/// Top-left corner of the tile slot at `pos` for a board drawn at `(x, y)`
pub fn tile_origin_from(x: f32, y: f32, pos: Position) -> (f32, f32) {
    let step = TILE_SIZE + GRID_PADDING;
    (
        x + GRID_PADDING + pos.col as f32 * step,
        y + GRID_PADDING + pos.row as f32 * step,
    )
}

/// Background colour for a tile value. Anything past 2048 shares its colour.
pub fn tile_color(value: u32) -> Color {
    let (r, g, b) = match value {
        0 => (60, 64, 72),
        2 => (78, 90, 115),
        4 => (95, 129, 157),
        8 => (124, 153, 180),
        16 => (141, 175, 199),
        32 => (152, 195, 121),
        64 => (229, 192, 123),
        128 => (224, 108, 117),
        256 => (198, 120, 221),
        512 => (171, 178, 191),
        1024 => (130, 170, 255),
        _ => (255, 135, 135),
    };
    Color::from_rgba(r, g, b, 255)
}

/// Digits shrink as values get longer
pub fn font_size_for(value: u32) -> f32 {
    match value {
        0..=512 => FONT_SIZE,
        513..=8192 => FONT_SIZE - 8.0,
        _ => FONT_SIZE - 16.0,
    }
}

/// Create UI buttons with standard layout
pub fn create_buttons() -> Vec<Button> {
    let x = (screen_width() - SCORE_PANEL.0 - BUTTON_WIDTH).max(SCORE_PANEL.0 + SCORE_PANEL.2);
    let y = SCORE_PANEL.1 + (SCORE_PANEL.3 - BUTTON_HEIGHT) / 2.0;
    vec![Button::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT, "New Game")]
}

/// Vertical space below the board, used for the footer hint
pub fn footer_y() -> f32 {
    (BOARD_TOP + BOARD_SIZE + 20.0).min(screen_height() - 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_origins_step_by_tile_and_padding() {
        let origin = tile_origin_from(0.0, 100.0, Position::new(0, 0));
        assert_eq!(origin, (10.0, 110.0));
        let last = tile_origin_from(0.0, 100.0, Position::new(3, 3));
        assert_eq!(last, (280.0, 380.0));
        // Last slot ends one padding short of the board edge
        assert_eq!(last.0 + TILE_SIZE + GRID_PADDING, BOARD_SIZE);
    }

    #[test]
    fn test_large_values_share_top_colour() {
        assert_eq!(tile_color(4096), tile_color(2048));
        assert_ne!(tile_color(2), tile_color(4));
    }

    #[test]
    fn test_font_shrinks_for_long_numbers() {
        assert_eq!(font_size_for(512), 36.0);
        assert_eq!(font_size_for(1024), 28.0);
        assert_eq!(font_size_for(16384), 20.0);
    }
}
