/// Side length of the board. The game is always played on 4×4.
pub const GRID_SIZE: usize = 4;

/// A cell coordinate on the board.
/// Animations reference cells only through positions, never through tiles.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Direction of a move, named after the edge tiles travel towards.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order the benchmark cycles through them
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Up,
    ];

    /// Map a (line, index) pair to a board position.
    ///
    /// `line` selects the row (Left/Right) or column (Up/Down); `index` is the
    /// distance from the edge tiles move towards, so index 0 is the cell a
    /// tile ends up in when nothing blocks it.
    pub const fn cell(self, line: usize, index: usize) -> Position {
        let last = GRID_SIZE - 1;
        match self {
            Direction::Left => Position::new(line, index),
            Direction::Right => Position::new(line, last - index),
            Direction::Up => Position::new(index, line),
            Direction::Down => Position::new(last - index, line),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// The 4×4 board. 0 is an empty cell, anything else is a power of two ≥ 2.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct Grid {
    cells: [[u32; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Create an empty board
    pub const fn new() -> Self {
        Self {
            cells: [[0; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Build a board from row-major values
    pub const fn from_rows(cells: [[u32; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells }
    }

    /// Row-major copy of the values
    pub const fn rows(&self) -> [[u32; GRID_SIZE]; GRID_SIZE] {
        self.cells
    }

    pub const fn get(&self, pos: Position) -> u32 {
        self.cells[pos.row][pos.col]
    }

    pub fn set(&mut self, pos: Position, value: u32) {
        self.cells[pos.row][pos.col] = value;
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells = [[0; GRID_SIZE]; GRID_SIZE];
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (Position, u32)> + '_ {
        (0..GRID_SIZE)
            .flat_map(|row| (0..GRID_SIZE).map(move |col| Position::new(row, col)))
            .map(|pos| (pos, self.get(pos)))
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Position> {
        self.iter_cells()
            .filter(|&(_, value)| value == 0)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Number of occupied cells
    pub fn tile_count(&self) -> usize {
        self.iter_cells().filter(|&(_, value)| value != 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.iter_cells().all(|(_, value)| value != 0)
    }

    /// Largest tile on the board (0 when empty)
    pub fn max_tile(&self) -> u32 {
        self.iter_cells().map(|(_, value)| value).max().unwrap_or(0)
    }

    /// True if two horizontally or vertically adjacent cells hold the same value
    pub fn has_equal_neighbors(&self) -> bool {
        self.iter_cells().any(|(pos, value)| {
            let right = pos.col + 1 < GRID_SIZE
                && self.get(Position::new(pos.row, pos.col + 1)) == value;
            let below = pos.row + 1 < GRID_SIZE
                && self.get(Position::new(pos.row + 1, pos.col)) == value;
            right || below
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_mapping_starts_at_target_edge() {
        assert_eq!(Direction::Left.cell(2, 0), Position::new(2, 0));
        assert_eq!(Direction::Right.cell(2, 0), Position::new(2, 3));
        assert_eq!(Direction::Up.cell(1, 0), Position::new(0, 1));
        assert_eq!(Direction::Down.cell(1, 0), Position::new(3, 1));
    }

    #[test]
    fn test_cell_mapping_covers_every_cell_once() {
        for dir in Direction::ALL {
            let mut seen = [[false; GRID_SIZE]; GRID_SIZE];
            for line in 0..GRID_SIZE {
                for index in 0..GRID_SIZE {
                    let pos = dir.cell(line, index);
                    assert!(!seen[pos.row][pos.col], "{dir:?} visits {pos:?} twice");
                    seen[pos.row][pos.col] = true;
                }
            }
        }
    }

    #[test]
    fn test_empty_cells_row_major() {
        let grid = Grid::from_rows([
            [2, 0, 2, 2],
            [2, 2, 2, 2],
            [2, 2, 2, 0],
            [2, 2, 2, 2],
        ]);
        assert_eq!(grid.empty_cells(), vec![Position::new(0, 1), Position::new(2, 3)]);
        assert_eq!(grid.tile_count(), 14);
        assert!(!grid.is_full());
    }

    #[test]
    fn test_equal_neighbors() {
        let checker = Grid::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        assert!(!checker.has_equal_neighbors());

        let mut vertical = checker;
        vertical.set(Position::new(3, 3), 4);
        assert!(vertical.has_equal_neighbors());
    }

    #[test]
    fn test_max_tile_and_clear() {
        let mut grid = Grid::from_rows([[0, 0, 0, 0], [0, 128, 0, 0], [0, 0, 8, 0], [0, 0, 0, 0]]);
        assert_eq!(grid.max_tile(), 128);
        grid.clear();
        assert_eq!(grid, Grid::new());
        assert_eq!(grid.max_tile(), 0);
    }
}
