use crate::consts;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// A square on the game grid, addressed by row (counting down from the top)
/// and column (counting right from the left edge)
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Cell {
    pub(crate) row: u16,
    pub(crate) col: u16,
}

impl Cell {
    pub(crate) const fn new(row: u16, col: u16) -> Cell {
        Cell { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The side length of the (always square) grid
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "u16")]
pub(crate) struct GridSize(u16);

impl GridSize {
    pub(crate) fn new(size: u16) -> Result<GridSize, GridSizeError> {
        if (consts::MIN_GRID_SIZE..=consts::MAX_GRID_SIZE).contains(&size) {
            Ok(GridSize(size))
        } else {
            Err(GridSizeError(size))
        }
    }

    pub(crate) fn get(self) -> u16 {
        self.0
    }
}

impl Default for GridSize {
    fn default() -> GridSize {
        GridSize(consts::DEFAULT_GRID_SIZE)
    }
}

impl TryFrom<u16> for GridSize {
    type Error = GridSizeError;

    fn try_from(value: u16) -> Result<GridSize, GridSizeError> {
        GridSize::new(value)
    }
}

#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
#[error(
    "grid size must be between {min} and {max}, got {0}",
    min = consts::MIN_GRID_SIZE,
    max = consts::MAX_GRID_SIZE
)]
pub(crate) struct GridSizeError(u16);

/// A `size`×`size` toroidal grid: moving off one edge brings you back on the
/// opposite edge.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    size: u16,
}

impl Grid {
    pub(crate) fn new(size: GridSize) -> Grid {
        Grid { size: size.get() }
    }

    pub(crate) fn size(self) -> u16 {
        self.size
    }

    pub(crate) fn contains(self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Iterate over every cell of the grid in row-major order
    pub(crate) fn cells(self) -> impl Iterator<Item = Cell> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Cell::new(row, col)))
    }

    pub(crate) fn area(self) -> usize {
        usize::from(self.size) * usize::from(self.size)
    }
}
