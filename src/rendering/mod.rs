use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::{Animation, AnimationKind, GridEngine, GRID_SIZE, Position};
use crate::ui::{
    self, Button, BOARD_COLOR, BOARD_SIZE, BOARD_TOP, EMPTY_TILE_COLOR, FONT_SIZE, MUTED_TEXT_COLOR,
    SCORE_PANEL, SMALL_FONT_SIZE, TEXT_COLOR, TILE_SIZE, WIN_TEXT_COLOR,
};

/// Peak extra scale of the merge pulse
const MERGE_PULSE: f32 = 0.2;

/// New tiles grow from nothing to full size
pub fn spawn_scale(ratio: f32) -> f32 {
    ratio.clamp(0.0, 1.0)
}

/// Merged tiles swell to 1.2× at the halfway point and settle back
pub fn merge_scale(ratio: f32) -> f32 {
    let ratio = ratio.clamp(0.0, 1.0);
    if ratio < 0.5 {
        1.0 + MERGE_PULSE * (ratio * 2.0)
    } else {
        1.0 + MERGE_PULSE * (1.0 - (ratio - 0.5) * 2.0)
    }
}

/// Scale for a tile given the animations attached to its cell.
/// Later events win, matching draw order.
pub fn tile_scale(cell: Position, animations: &[Animation]) -> f32 {
    animations.iter().fold(1.0, |scale, anim| match anim.kind {
        AnimationKind::Spawn { cell: c } if c == cell => spawn_scale(anim.ratio()),
        AnimationKind::Merge { cell: c, .. } if c == cell => merge_scale(anim.ratio()),
        _ => scale,
    })
}

/// Point `ratio` of the way from `from` to `to`
pub fn lerp(from: (f32, f32), to: (f32, f32), ratio: f32) -> (f32, f32) {
    (
        from.0 + (to.0 - from.0) * ratio,
        from.1 + (to.1 - from.1) * ratio,
    )
}

/// One tile's movement during a move, joined from its single-step slides
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SlidePath {
    pub start: Position,
    /// Cell the tile left on its final step
    pub last_from: Position,
    pub end: Position,
    pub ratio: f32,
}

/// Join consecutive slide steps of the same tile into one path.
/// A step continues the previous path when it starts where that path ended
/// and was recorded in the same move (equal progress).
pub fn slide_paths<'a>(slides: impl Iterator<Item = &'a Animation>) -> Vec<SlidePath> {
    let mut paths: Vec<(SlidePath, u32)> = Vec::new();
    for anim in slides {
        let AnimationKind::Slide { from, to } = anim.kind else {
            continue;
        };
        if anim.is_finished() {
            continue;
        }
        match paths.last_mut() {
            Some((path, progress)) if path.end == from && *progress == anim.progress => {
                path.last_from = from;
                path.end = to;
            }
            _ => paths.push((
                SlidePath {
                    start: from,
                    last_from: from,
                    end: to,
                    ratio: anim.ratio(),
                },
                anim.progress,
            )),
        }
    }
    paths.into_iter().map(|(path, _)| path).collect()
}

/// Cell one further step along the path's direction, if it is on the board
fn step_beyond(path: &SlidePath) -> Option<Position> {
    let row = (2 * path.end.row).checked_sub(path.last_from.row)?;
    let col = (2 * path.end.col).checked_sub(path.last_from.col)?;
    (row < GRID_SIZE && col < GRID_SIZE).then_some(Position::new(row, col))
}

/// Where a sliding tile is drawn heading to, and with which value.
/// A tile that merged after sliding keeps going into the merge cell and is
/// drawn with its pre-merge value.
pub fn slide_target(engine: &GridEngine, path: &SlidePath) -> Option<(Position, u32)> {
    let value = engine.grid().get(path.end);
    if value != 0 {
        return Some((path.end, value));
    }
    let merge_cell = step_beyond(path)?;
    engine
        .animations()
        .events_for(merge_cell)
        .iter()
        .rev()
        .find_map(|anim| match anim.kind {
            AnimationKind::Merge { cell, value } if cell == merge_cell => Some((merge_cell, value / 2)),
            _ => None,
        })
}

/// Draw a single tile with its top-left slot corner at (x, y)
fn draw_tile(x: f32, y: f32, value: u32, scale: f32) {
    let size = TILE_SIZE * scale;
    let offset = (TILE_SIZE - size) / 2.0;
    draw_rectangle(x + offset, y + offset, size, size, ui::tile_color(value));

    if value == 0 || scale <= 0.0 {
        return;
    }
    let text = value.to_string();
    let font_size = ui::font_size_for(value) * scale.min(1.0);
    let dims = measure_text(&text, None, font_size as u16, 1.0);
    draw_text(
        &text,
        x + (TILE_SIZE - dims.width) / 2.0,
        y + (TILE_SIZE + dims.height) / 2.0,
        font_size,
        TEXT_COLOR,
    );
}

/// Draw board background, empty slots, tiles and in-flight slides
pub fn draw_board(engine: &GridEngine) {
    let board_x = ui::board_x();
    draw_rectangle(board_x, BOARD_TOP, BOARD_SIZE, BOARD_SIZE, BOARD_COLOR);

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let (x, y) = ui::tile_origin(Position::new(row, col));
            draw_rectangle(x, y, TILE_SIZE, TILE_SIZE, EMPTY_TILE_COLOR);
        }
    }

    let animations = engine.animations();
    for (cell, value) in engine.grid().iter_cells() {
        if value == 0 {
            continue;
        }
        let (x, y) = ui::tile_origin(cell);
        let scale = tile_scale(cell, &animations.events_for(cell));
        draw_tile(x, y, value, scale);
    }

    // Slides go on top, one path per tile
    for path in slide_paths(animations.slides()) {
        let Some((end, value)) = slide_target(engine, &path) else {
            continue;
        };
        let (x, y) = lerp(ui::tile_origin(path.start), ui::tile_origin(end), path.ratio);
        draw_tile(x, y, value, 1.0);
    }
}

fn draw_centered(text: &str, y: f32, size: f32, color: Color) {
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(text, (screen_width() - dims.width) / 2.0, y, size, color);
}

fn draw_score_panel(score: u32) {
    let (x, y, w, h) = SCORE_PANEL;
    draw_rectangle(x, y, w, h, EMPTY_TILE_COLOR);

    let label = "SCORE";
    let label_dims = measure_text(label, None, 18, 1.0);
    draw_text(label, x + (w - label_dims.width) / 2.0, y + 22.0, 18.0, MUTED_TEXT_COLOR);

    let text = score.to_string();
    let dims = measure_text(&text, None, 32, 1.0);
    draw_text(&text, x + (w - dims.width) / 2.0, y + h - 8.0, 32.0, TEXT_COLOR);
}

/// Game-over overlay or win banner
fn draw_overlay(engine: &GridEngine) {
    if engine.is_game_over() {
        draw_rectangle(0.0, 0.0, screen_width(), screen_height(), Color::from_rgba(0, 0, 0, 180));
        let mid = screen_height() / 2.0;
        draw_centered("Game Over!", mid - 30.0, FONT_SIZE, WHITE);
        draw_centered("Press R to restart", mid + 20.0, SMALL_FONT_SIZE, WHITE);
    } else if engine.has_won() {
        draw_centered("You Win!", BOARD_TOP - 12.0, FONT_SIZE, WIN_TEXT_COLOR);
        draw_centered(
            "Keep playing or press R to restart",
            ui::footer_y(),
            SMALL_FONT_SIZE * 0.75,
            MUTED_TEXT_COLOR,
        );
    }
}

/// Draw score panel, buttons and status overlays
pub fn draw_controls(state: &GameState, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_score_panel(state.engine.score());
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));
    draw_overlay(&state.engine);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AnimationTracker, Direction, Grid, SequenceSpawner};

    #[test]
    fn test_merge_pulse_peaks_halfway() {
        assert_eq!(merge_scale(0.0), 1.0);
        assert!((merge_scale(0.5) - 1.2).abs() < 1e-6);
        assert!((merge_scale(0.25) - 1.1).abs() < 1e-6);
        assert!((merge_scale(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_spawn_grows_linearly() {
        assert_eq!(spawn_scale(0.0), 0.0);
        assert_eq!(spawn_scale(0.3), 0.3);
        assert_eq!(spawn_scale(2.0), 1.0);
    }

    #[test]
    fn test_tile_scale_uses_latest_matching_event() {
        let cell = Position::new(1, 1);
        let mut tracker = AnimationTracker::new();
        tracker.record(AnimationKind::Spawn { cell });
        tracker.record(AnimationKind::Spawn { cell: Position::new(0, 0) });
        tracker.tick();
        tracker.tick();
        assert!((tile_scale(cell, &tracker.events_for(cell)) - 0.2).abs() < 1e-6);

        tracker.record(AnimationKind::Merge { cell, value: 8 });
        assert_eq!(tile_scale(cell, &tracker.events_for(cell)), 1.0);
        assert_eq!(tile_scale(Position::new(3, 3), &tracker.events_for(Position::new(3, 3))), 1.0);
    }

    // The new tile lands late in row-major order, away from the slides under test
    fn slide_engine(rows: [[u32; 4]; 4], direction: Direction) -> GridEngine {
        let mut engine = GridEngine::from_grid(
            Grid::from_rows(rows),
            Box::new(SequenceSpawner::new([(14, 2)])),
        );
        assert!(engine.shift(direction));
        engine
    }

    #[test]
    fn test_multi_step_slide_is_one_path() {
        let engine = slide_engine([[0, 0, 0, 8], [0; 4], [0; 4], [0; 4]], Direction::Left);
        let paths = slide_paths(engine.animations().slides());
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].start, Position::new(0, 3));
        assert_eq!(paths[0].end, Position::new(0, 0));
        assert_eq!(slide_target(&engine, &paths[0]), Some((Position::new(0, 0), 8)));
    }

    #[test]
    fn test_each_tile_gets_its_own_path() {
        let engine = slide_engine([[0, 2, 0, 4], [0, 0, 16, 0], [0; 4], [0; 4]], Direction::Left);
        let ends: Vec<(Position, Position)> = slide_paths(engine.animations().slides())
            .iter()
            .map(|p| (p.start, p.end))
            .collect();
        assert_eq!(
            ends,
            vec![
                (Position::new(0, 1), Position::new(0, 0)),
                (Position::new(0, 3), Position::new(0, 1)),
                (Position::new(1, 2), Position::new(1, 0)),
            ]
        );
    }

    #[test]
    fn test_merging_tile_slides_into_merge_cell() {
        let engine = slide_engine([[2, 0, 0, 2], [0; 4], [0; 4], [0; 4]], Direction::Left);
        let paths = slide_paths(engine.animations().slides());
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].start, Position::new(0, 3));
        assert_eq!(slide_target(&engine, &paths[0]), Some((Position::new(0, 0), 2)));
    }

    #[test]
    fn test_paths_from_separate_moves_stay_apart() {
        let mut tracker = AnimationTracker::new();
        tracker.record(AnimationKind::Slide { from: Position::new(0, 2), to: Position::new(0, 1) });
        tracker.tick();
        tracker.record(AnimationKind::Slide { from: Position::new(0, 1), to: Position::new(0, 0) });
        assert_eq!(slide_paths(tracker.slides()).len(), 2);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp((0.0, 10.0), (90.0, 10.0), 0.5), (45.0, 10.0));
        assert_eq!(lerp((5.0, 5.0), (5.0, 95.0), 0.0), (5.0, 5.0));
    }
}
