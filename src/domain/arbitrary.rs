use quickcheck::{Arbitrary, Gen};

use super::{Direction, Grid, GRID_SIZE, Position};

impl Arbitrary for Direction {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Direction::ALL).unwrap_or(&Direction::Left)
    }
}

impl Arbitrary for Grid {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut grid = Grid::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                // About a third of the cells empty, the rest 2..=2048
                let roll = u8::arbitrary(g) % 16;
                let value = if roll < 5 { 0 } else { 1 << (roll - 4) };
                grid.set(Position::new(row, col), value);
            }
        }
        grid
    }
}

/// A full board where no two neighbouring cells match
#[derive(Clone, Debug)]
pub struct StuckGrid(pub Grid);

impl Arbitrary for StuckGrid {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut grid = Grid::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let left = (col > 0).then(|| grid.get(Position::new(row, col - 1)));
                let up = (row > 0).then(|| grid.get(Position::new(row - 1, col)));
                // Exponents 1..=11; bump past whatever the left and upper cells hold
                let mut exponent = 1 + u32::from(u8::arbitrary(g) % 11);
                while Some(1 << exponent) == left || Some(1 << exponent) == up {
                    exponent = exponent % 11 + 1;
                }
                grid.set(Position::new(row, col), 1 << exponent);
            }
        }
        StuckGrid(grid)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    quickcheck! {
        fn stuck_grids_are_full_without_pairs(stuck: StuckGrid) -> bool {
            stuck.0.is_full() && !stuck.0.has_equal_neighbors()
        }
    }
}
