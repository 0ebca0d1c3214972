mod difficulty;
mod direction;
mod grid;
mod placement;
mod scoring;
mod snake;
mod snapshot;
pub(crate) use self::difficulty::{compute_level, Pacing};
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::{Cell, Grid, GridSize};
pub(crate) use self::placement::{place_food, place_poison};
pub(crate) use self::scoring::compute_score;
use self::snake::Snake;
pub(crate) use self::snapshot::Snapshot;
use crate::command::Command;
use crate::consts;
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::Frame;
use std::fmt;
use std::time::{Duration, Instant};

/// Gameplay settings fixed for the duration of a game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Settings {
    pub(crate) grid_size: GridSize,
    pub(crate) points_per_food: u32,
    pub(crate) pacing: Pacing,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            grid_size: GridSize::default(),
            points_per_food: consts::POINTS_PER_FOOD,
            pacing: Pacing::default(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: Grid,
    snake: Snake,
    food: Option<Cell>,
    poison: Option<Cell>,
    food_eaten: u32,
    settings: Settings,
    state: GameState,
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(settings: Settings) -> Self {
        Game::new_with_rng(settings, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(settings: Settings, rng: R) -> Game<R> {
        let grid = Grid::new(settings.grid_size);
        let snake = Snake::new(consts::START_CELL, consts::START_DIRECTION, grid);
        let mut game = Game {
            rng,
            grid,
            snake,
            food: None,
            poison: None,
            food_eaten: 0,
            settings,
            state: GameState::Running,
            next_tick: None,
        };
        game.replace_food_and_poison();
        game
    }

    /// Wait for either the next tick or the next input event, whichever comes
    /// first, and handle it
    pub(crate) fn process_input(&mut self) -> std::io::Result<()> {
        match self.state {
            GameState::Running => {
                let period = self.tick_period();
                let now = Instant::now();
                let when = *self.next_tick.get_or_insert(now + period);
                let wait = when.saturating_duration_since(now);
                if wait.is_zero() || !poll(wait)? {
                    self.advance();
                    self.next_tick = None;
                } else {
                    self.handle_event(read()?);
                }
            }
            GameState::Paused => {
                if poll(consts::PAUSE_POLL_INTERVAL)? {
                    self.handle_event(read()?);
                }
            }
            GameState::Over(_) | GameState::Abandoned => (),
        }
        Ok(())
    }

    /// Move the game forwards by one tick
    pub(crate) fn advance(&mut self) {
        if !self.running() {
            return;
        }
        let next = self.snake.next_head(self.grid);
        debug_assert!(self.grid.contains(next), "{next} is off the grid");
        if self.snake.contains(next) {
            self.state = GameState::Over(Outcome::SelfCollision);
        } else if self.poison == Some(next) {
            self.state = GameState::Over(Outcome::Poison);
        } else if self.food == Some(next) {
            self.snake.grow(next);
            self.food_eaten = self.food_eaten.saturating_add(1);
            self.replace_food_and_poison();
        } else {
            self.snake.slither(next);
        }
    }

    fn replace_food_and_poison(&mut self) {
        let occupied = self.snake.occupied();
        self.food = place_food(&mut self.rng, self.grid, &occupied);
        self.poison = place_poison(&mut self.rng, self.grid, &occupied, self.food);
        if self.food.is_none() {
            tracing::debug!(
                length = self.snake.len(),
                cells = self.grid.area(),
                "No free cell left for food"
            );
        }
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(&self.snapshot(), frame.area());
    }

    fn handle_event(&mut self, event: Event) {
        if event == Event::FocusLost {
            if self.running() {
                self.toggle_pause();
            }
        } else if let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) {
            self.handle_command(cmd);
        }
    }

    /// Apply a command from the player.  Commands received after the game
    /// has ended are ignored.
    pub(crate) fn handle_command(&mut self, cmd: Command) {
        if !self.should_continue() {
            return;
        }
        match cmd {
            Command::Up => self.snake.turn(Direction::Up),
            Command::Down => self.snake.turn(Direction::Down),
            Command::Left => self.snake.turn(Direction::Left),
            Command::Right => self.snake.turn(Direction::Right),
            Command::Pause => self.toggle_pause(),
            Command::Quit => self.state = GameState::Abandoned,
        }
    }

    fn toggle_pause(&mut self) {
        match self.state {
            GameState::Running => {
                self.state = GameState::Paused;
                self.next_tick = None;
            }
            GameState::Paused => self.state = GameState::Running,
            GameState::Over(_) | GameState::Abandoned => (),
        }
    }

    fn running(&self) -> bool {
        self.state == GameState::Running
    }

    fn paused(&self) -> bool {
        self.state == GameState::Paused
    }

    /// Returns `false` once the game has ended, either by the snake dying or
    /// by the player quitting
    pub(crate) fn should_continue(&self) -> bool {
        matches!(self.state, GameState::Running | GameState::Paused)
    }

    /// If the snake has died, return what killed it
    pub(crate) fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::Over(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub(crate) fn level(&self) -> u32 {
        compute_level(i64::from(self.food_eaten))
    }

    pub(crate) fn score(&self) -> u32 {
        compute_score(i64::from(self.food_eaten), self.settings.points_per_food)
    }

    pub(crate) fn tick_period(&self) -> Duration {
        self.settings.pacing.tick_period(self.level())
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            size: self.grid.size(),
            snake: self.snake.body().iter().copied().collect(),
            food: self.food,
            poison: self.poison,
            level: self.level(),
            score: self.score(),
            paused: self.paused(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    Paused,
    Over(Outcome),
    /// The player quit before the snake died
    Abandoned,
}

/// What ended a game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Outcome {
    /// The snake ran into itself
    SelfCollision,
    /// The snake ate the poison
    Poison,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::SelfCollision => write!(f, "Game Over"),
            Outcome::Poison => write!(f, "Game Over (poison)"),
        }
    }
}
