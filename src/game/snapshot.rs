use super::grid::Cell;
use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::Line,
    widgets::Widget,
};
use std::collections::HashSet;

/// Everything needed to draw one frame of a game
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snapshot {
    pub(crate) size: u16,
    pub(crate) snake: Vec<Cell>,
    pub(crate) food: Option<Cell>,
    pub(crate) poison: Option<Cell>,
    pub(crate) level: u32,
    pub(crate) score: u32,
    pub(crate) paused: bool,
}

impl Snapshot {
    /// Number of terminal rows taken up by the grid plus the status line
    pub(crate) fn height(&self) -> u16 {
        self.size.saturating_add(1)
    }

    pub(crate) fn status_line(&self) -> String {
        let mut s = format!(
            "length of snake: {}  level: {}  score: {}",
            self.snake.len(),
            self.level,
            self.score
        );
        if self.paused {
            s.push_str("  [PAUSED - press 'p' to resume]");
        }
        s
    }
}

impl Widget for &Snapshot {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let snake = self.snake.iter().copied().collect::<HashSet<_>>();
        let mut canvas = Canvas { area, buf };
        for row in 0..self.size {
            for col in 0..self.size {
                let cell = Cell::new(row, col);
                // Food wins over poison wins over snake
                let symbol = if self.food == Some(cell) {
                    consts::FOOD_SYMBOL
                } else if self.poison == Some(cell) {
                    consts::POISON_SYMBOL
                } else if snake.contains(&cell) {
                    consts::SNAKE_SYMBOL
                } else {
                    consts::EMPTY_SYMBOL
                };
                canvas.draw_cell(cell, symbol);
            }
        }
        let status_area = Rect {
            y: area.y.saturating_add(self.size),
            height: 1,
            ..area
        }
        .intersection(area);
        Line::styled(self.status_line(), consts::STATUS_STYLE).render(status_area, buf);
    }
}

/// Draws grid cells, each of which is two terminal columns wide
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, cell: Cell, symbol: &str) {
        let Some(x) = cell
            .col
            .checked_mul(2)
            .and_then(|dx| self.area.x.checked_add(dx))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(cell.row) else {
            return;
        };
        let x2 = x.saturating_add(1);
        if !(self.area.contains(Position::new(x, y)) && self.area.contains(Position::new(x2, y))) {
            return;
        }
        if let Some(c) = self.buf.cell_mut((x, y)) {
            c.set_symbol(symbol);
        }
        // The glyph covers the following column as well
        if let Some(c) = self.buf.cell_mut((x2, y)) {
            c.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Snapshot {
        Snapshot {
            size: 3,
            snake: vec![Cell::new(0, 0), Cell::new(0, 1)],
            food: Some(Cell::new(2, 2)),
            poison: Some(Cell::new(1, 0)),
            level: 0,
            score: 10,
            paused: false,
        }
    }

    #[test]
    fn render() {
        let snapshot = sample();
        let area = Rect::new(0, 0, 40, 4);
        let mut buffer = Buffer::empty(area);
        snapshot.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            String::from("🐍🐍⬜"),
            String::from("💀⬜⬜"),
            String::from("⬜⬜🍎"),
            format!("{:40}", "length of snake: 2  level: 0  score: 10"),
        ]);
        expected.set_style(Rect::new(0, 3, 40, 1), consts::STATUS_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn food_drawn_over_snake() {
        let mut snapshot = sample();
        snapshot.food = Some(Cell::new(0, 1));
        snapshot.poison = None;
        let area = Rect::new(0, 0, 40, 4);
        let mut buffer = Buffer::empty(area);
        snapshot.render(area, &mut buffer);
        assert_eq!(buffer[(0, 0)].symbol(), consts::SNAKE_SYMBOL);
        assert_eq!(buffer[(2, 0)].symbol(), consts::FOOD_SYMBOL);
        assert_eq!(buffer[(0, 1)].symbol(), consts::EMPTY_SYMBOL);
    }

    #[test]
    fn clipped_to_area() {
        let snapshot = sample();
        let area = Rect::new(0, 0, 5, 2);
        let mut buffer = Buffer::empty(area);
        snapshot.render(area, &mut buffer);
        let expected = Buffer::with_lines(["🐍🐍 ", "💀⬜ "]);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn status_line() {
        let mut snapshot = sample();
        assert_eq!(
            snapshot.status_line(),
            "length of snake: 2  level: 0  score: 10"
        );
        snapshot.paused = true;
        assert_eq!(
            snapshot.status_line(),
            "length of snake: 2  level: 0  score: 10  [PAUSED - press 'p' to resume]"
        );
    }

    #[test]
    fn height_includes_status_line() {
        assert_eq!(sample().height(), 4);
    }
}
