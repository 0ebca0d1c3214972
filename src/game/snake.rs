use super::direction::Direction;
use super::grid::{Cell, Grid};
use std::collections::{HashSet, VecDeque};

/// The snake: the cells it covers & where it's heading
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The cell from which the next move is computed.  At the start of a game
    /// this is the cell just ahead of the body; after every move it is the
    /// newest body cell.
    pub(super) head: Cell,

    /// The cells occupied by the snake, with the tail at the front and the
    /// most recent at the end.  Never empty.
    pub(super) body: VecDeque<Cell>,

    /// The direction in which the snake is currently facing
    pub(super) direction: Direction,
}

impl Snake {
    /// Create a new one-cell snake at `start` facing in `direction`, with its
    /// head queued up on the neighboring cell in that direction.
    pub(super) fn new(start: Cell, direction: Direction, grid: Grid) -> Snake {
        Snake {
            head: direction.advance(start, grid),
            body: VecDeque::from([start]),
            direction,
        }
    }

    pub(super) fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub(super) fn len(&self) -> usize {
        self.body.len()
    }

    pub(super) fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub(super) fn occupied(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }

    /// Change the snake's direction to `direction`
    pub(super) fn turn(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Return the cell the snake will move into on its next move
    pub(super) fn next_head(&self, grid: Grid) -> Cell {
        self.direction.advance(self.head, grid)
    }

    /// Move into `cell`, dropping the tail so that the length is unchanged
    pub(super) fn slither(&mut self, cell: Cell) {
        self.body.push_back(cell);
        self.head = cell;
        if self.body.len() > 1 {
            let _ = self.body.pop_front();
        }
    }

    /// Move into `cell` while keeping the tail, growing by one
    pub(super) fn grow(&mut self, cell: Cell) {
        self.body.push_back(cell);
        self.head = cell;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::GridSize;

    fn grid() -> Grid {
        Grid::new(GridSize::default())
    }

    #[test]
    fn new_snake_queues_head() {
        let snake = Snake::new(Cell::new(0, 0), Direction::Right, grid());
        assert_eq!(snake.head, Cell::new(0, 1));
        assert_eq!(snake.body(), &VecDeque::from([Cell::new(0, 0)]));
        assert_eq!(snake.next_head(grid()), Cell::new(0, 2));
    }

    #[test]
    fn slither_keeps_length() {
        let mut snake = Snake::new(Cell::new(0, 0), Direction::Right, grid());
        snake.slither(Cell::new(0, 2));
        assert_eq!(snake.body(), &VecDeque::from([Cell::new(0, 2)]));
        snake.grow(Cell::new(0, 3));
        snake.slither(Cell::new(0, 4));
        assert_eq!(
            snake.body(),
            &VecDeque::from([Cell::new(0, 3), Cell::new(0, 4)])
        );
        assert_eq!(snake.head, Cell::new(0, 4));
    }

    #[test]
    fn grow_adds_one() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Down, grid());
        snake.grow(Cell::new(6, 5));
        assert_eq!(snake.len(), 2);
        assert!(snake.contains(Cell::new(5, 5)));
        assert!(snake.contains(Cell::new(6, 5)));
    }
}
