//! Assorted constants & hard-coded configuration
use crate::game::{Cell, Direction};
use ratatui::style::{Modifier, Style};
use std::time::Duration;

/// Side length of the grid when not set in the configuration file
pub(crate) const DEFAULT_GRID_SIZE: u16 = 10;

/// Smallest permitted grid size
pub(crate) const MIN_GRID_SIZE: u16 = 3;

/// Largest permitted grid size.  Each cell is two terminal columns wide, so
/// this fills an 80-column terminal.
pub(crate) const MAX_GRID_SIZE: u16 = 40;

/// The cell occupied by the snake at the start of a game
pub(crate) const START_CELL: Cell = Cell::new(0, 0);

/// The direction in which the snake starts out moving
pub(crate) const START_DIRECTION: Direction = Direction::Right;

/// Number of pieces of food that must be eaten to go up one level
pub(crate) const FOODS_PER_LEVEL: i64 = 10;

/// Points awarded per piece of food when not set in the configuration file
pub(crate) const POINTS_PER_FOOD: u32 = 10;

/// Milliseconds between ticks at level 0
pub(crate) const BASE_DELAY_MS: u64 = 500;

/// Milliseconds taken off the delay per level
pub(crate) const DELAY_STEP_MS: u64 = 100;

/// Minimum milliseconds between ticks
pub(crate) const MIN_DELAY_MS: u64 = 100;

/// How often to redraw & check for input while the game is paused
pub(crate) const PAUSE_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Number of entries kept in the high score list
pub(crate) const MAX_HIGH_SCORES: usize = 10;

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: &str = "🍎";

/// Glyph for the poison
pub(crate) const POISON_SYMBOL: &str = "💀";

/// Glyph for the parts of the snake
pub(crate) const SNAKE_SYMBOL: &str = "🐍";

/// Glyph for empty cells
pub(crate) const EMPTY_SYMBOL: &str = "⬜";

/// Style for the status line below the grid
pub(crate) const STATUS_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the "Game Over" message
pub(crate) const GAME_OVER_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);
