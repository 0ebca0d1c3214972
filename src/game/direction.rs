use super::grid::{Cell, Grid};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Return the cell one step from `cell` in this direction, wrapping
    /// around the edges of `grid`
    pub(crate) fn advance(self, cell: Cell, grid: Grid) -> Cell {
        let Cell { mut row, mut col } = cell;
        match self {
            Direction::Up => row = decrement_wrapping(row, grid.size()),
            Direction::Right => col = increment_wrapping(col, grid.size()),
            Direction::Down => row = increment_wrapping(row, grid.size()),
            Direction::Left => col = decrement_wrapping(col, grid.size()),
        }
        Cell { row, col }
    }
}

fn decrement_wrapping(x: u16, size: u16) -> u16 {
    x.checked_sub(1).unwrap_or_else(|| size.saturating_sub(1))
}

fn increment_wrapping(x: u16, size: u16) -> u16 {
    x.checked_add(1).filter(|&xx| xx < size).unwrap_or(0)
}
