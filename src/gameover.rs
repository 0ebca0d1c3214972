use crate::consts;
use crate::game::{Outcome, Snapshot};
use crate::warning::Warning;
use crossterm::event::{read, Event};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::Widget,
    Frame,
};

/// The screen shown after the snake has died: the final board, what killed
/// the snake, and the high score list
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameOver {
    snapshot: Snapshot,
    outcome: Outcome,
    /// Zero-based position of the final score in the high score list
    rank: Option<usize>,
    scores: Vec<u32>,
    warning: Option<Warning>,
}

impl GameOver {
    pub(crate) fn new(
        snapshot: Snapshot,
        outcome: Outcome,
        rank: Option<usize>,
        scores: Vec<u32>,
        warning: Option<Warning>,
    ) -> GameOver {
        GameOver {
            snapshot,
            outcome,
            rank,
            scores,
            warning,
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    /// Wait for an input event and handle it.  Returns `true` once the player
    /// has dismissed the screen.
    pub(crate) fn process_input(&mut self) -> std::io::Result<bool> {
        Ok(self.handle_event(read()?))
    }

    fn handle_event(&mut self, event: Event) -> bool {
        if event.as_key_press_event().is_none() {
            return false;
        }
        // The first key press only dismisses the warning
        self.warning.take().is_none()
    }

    fn outcome_line(&self) -> Line<'static> {
        let mut line = Line::from(Span::styled(
            self.outcome.to_string(),
            consts::GAME_OVER_STYLE,
        ));
        if let Some(rank) = self.rank {
            line.push_span(format!("  New high score: #{}!", rank.saturating_add(1)));
        }
        line
    }

    fn scores_line(&self) -> Line<'static> {
        if self.scores.is_empty() {
            Line::from("High scores: none yet")
        } else {
            let scores = self
                .scores
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>();
            Line::from(format!("High scores: {}", scores.join(" · ")))
        }
    }
}

impl Widget for &GameOver {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [board_area, outcome_area, scores_area, _, prompt_area] = Layout::vertical([
            Constraint::Length(self.snapshot.height()),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Start)
        .areas(area);
        self.snapshot.render(board_area, buf);
        self.outcome_line().render(outcome_area, buf);
        self.scores_line().render(scores_area, buf);
        Line::from("Press any key to exit").render(prompt_area, buf);
        if let Some(ref warning) = self.warning {
            warning.render(area, buf);
        }
    }
}
