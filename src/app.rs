use crate::game::{Game, Outcome, Settings, Snapshot};
use crate::gameover::GameOver;
use crate::highscores::{HighScores, SaveError};
use crate::warning::Warning;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::path::PathBuf;

/// A single play session: one game followed by the game-over screen
#[derive(Debug)]
pub(crate) struct App {
    screen: Screen,
    high_scores: HighScores,
    /// Where to save the high scores at the end of the game.  `None` if they
    /// are not to be saved.
    high_scores_file: Option<PathBuf>,
    ending: Option<Ending>,
}

impl App {
    pub(crate) fn new(
        settings: Settings,
        high_scores: HighScores,
        high_scores_file: Option<PathBuf>,
    ) -> App {
        App {
            screen: Screen::Game(Game::new(settings)),
            high_scores,
            high_scores_file,
            ending: None,
        }
    }

    /// Run the session until the player exits.  Returns how the game ended,
    /// or `None` if the terminal failed before it did.
    pub(crate) fn run<B: Backend>(
        mut self,
        mut terminal: Terminal<B>,
    ) -> io::Result<Option<Ending>> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(self.ending)
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        match self.screen {
            Screen::Game(ref game) => {
                terminal.draw(|frame| game.draw(frame))?;
            }
            Screen::GameOver(ref screen) => {
                terminal.draw(|frame| screen.draw(frame))?;
            }
            Screen::Quit => (),
        }
        Ok(())
    }

    fn process_input(&mut self) -> io::Result<()> {
        match self.screen {
            Screen::Game(ref mut game) => {
                game.process_input()?;
                if !game.should_continue() {
                    let snapshot = game.snapshot();
                    let outcome = game.outcome();
                    let score = game.score();
                    self.screen = self.end_game(snapshot, outcome, score);
                }
            }
            Screen::GameOver(ref mut screen) => {
                if screen.process_input()? {
                    tracing::info!("Exiting");
                    self.screen = Screen::Quit;
                }
            }
            Screen::Quit => (),
        }
        Ok(())
    }

    /// Record the final score, save the high scores, and return the screen to
    /// show next
    fn end_game(&mut self, snapshot: Snapshot, outcome: Option<Outcome>, score: u32) -> Screen {
        if let Some(outcome) = outcome {
            tracing::info!(%outcome, score, "Game over");
        } else {
            tracing::info!(score, "Player quit");
        }
        let rank = self.high_scores.submit(i64::from(score));
        let save_error = self.save_high_scores().err();
        let warning = save_error.as_ref().map(|e| Warning::from_error(e));
        self.ending = Some(Ending {
            outcome,
            score,
            rank,
            save_error,
        });
        if let Some(outcome) = outcome {
            let scores = self.high_scores.get().to_vec();
            Screen::GameOver(GameOver::new(snapshot, outcome, rank, scores, warning))
        } else {
            Screen::Quit
        }
    }

    fn save_high_scores(&self) -> Result<(), SaveError> {
        let Some(ref path) = self.high_scores_file else {
            tracing::debug!("Not saving high scores");
            return Ok(());
        };
        match self.high_scores.save(path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "Saved high scores");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to save high scores"
                );
                Err(e)
            }
        }
    }

    fn quitting(&self) -> bool {
        matches!(self.screen, Screen::Quit)
    }
}

#[derive(Debug)]
enum Screen {
    Game(Game),
    GameOver(GameOver),
    Quit,
}

/// How a play session ended
#[derive(Debug)]
pub(crate) struct Ending {
    /// What killed the snake, or `None` if the player quit
    pub(crate) outcome: Option<Outcome>,
    pub(crate) score: u32,
    /// Zero-based position of the score in the high score list
    pub(crate) rank: Option<usize>,
    pub(crate) save_error: Option<SaveError>,
}

impl Ending {
    /// Print a summary of the session for after the terminal has been
    /// restored
    pub(crate) fn report(self) {
        if let Some(outcome) = self.outcome {
            println!("{outcome}");
        } else {
            println!("Quit");
        }
        println!("Final score: {}", self.score);
        if let Some(rank) = self.rank {
            println!("New high score: #{}!", rank.saturating_add(1));
        }
        if let Some(e) = self.save_error {
            eprintln!("Warning: {:?}", anyhow::Error::new(e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn app(high_scores_file: Option<PathBuf>) -> App {
        let mut high_scores = HighScores::default();
        let _ = high_scores.submit(50);
        App::new(Settings::default(), high_scores, high_scores_file)
    }

    fn snapshot() -> Snapshot {
        Game::new(Settings::default()).snapshot()
    }

    #[test]
    fn game_over_saves_and_shows_screen() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("scores.txt");
        let mut app = app(Some(path.clone()));
        let snap = snapshot();
        let screen = app.end_game(snap.clone(), Some(Outcome::Poison), 70);
        let Screen::GameOver(screen) = screen else {
            panic!("game should have moved to the game-over screen");
        };
        assert_eq!(
            screen,
            GameOver::new(snap, Outcome::Poison, Some(0), vec![70, 50], None)
        );
        assert_eq!(fs_err::read_to_string(&path).unwrap(), "70\n50\n");
        let ending = app.ending.unwrap();
        assert_eq!(ending.outcome, Some(Outcome::Poison));
        assert_eq!(ending.score, 70);
        assert_eq!(ending.rank, Some(0));
        assert!(ending.save_error.is_none());
    }

    #[test]
    fn quit_saves_and_exits() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("scores.txt");
        let mut app = app(Some(path.clone()));
        let screen = app.end_game(snapshot(), None, 20);
        assert!(matches!(screen, Screen::Quit));
        assert_eq!(fs_err::read_to_string(&path).unwrap(), "50\n20\n");
        let ending = app.ending.unwrap();
        assert_eq!(ending.outcome, None);
        assert_eq!(ending.rank, Some(1));
    }

    #[test]
    fn saving_disabled() {
        let mut app = app(None);
        let screen = app.end_game(snapshot(), Some(Outcome::SelfCollision), 0);
        assert!(matches!(screen, Screen::GameOver(_)));
        assert_eq!(app.high_scores.get(), [50, 0]);
        assert!(app.ending.unwrap().save_error.is_none());
    }

    #[test]
    fn save_failure_shows_warning() {
        let tmpdir = tempdir().unwrap();
        let mut app = app(Some(tmpdir.path().to_path_buf()));
        let snap = snapshot();
        let screen = app.end_game(snap.clone(), Some(Outcome::SelfCollision), 10);
        let Screen::GameOver(screen) = screen else {
            panic!("game should have moved to the game-over screen");
        };
        let without_warning =
            GameOver::new(snap, Outcome::SelfCollision, Some(1), vec![50, 10], None);
        assert_ne!(screen, without_warning);
        assert_eq!(app.high_scores.get(), [50, 10]);
        assert!(app.ending.unwrap().save_error.is_some());
    }
}
