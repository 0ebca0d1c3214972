use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// An abstract input from the player
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Up,
    Down,
    Left,
    Right,
    Pause,
    Quit,
}

impl Command {
    /// Map a key press to a command.  Returns `None` for keys that don't do
    /// anything.
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        let normal = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (m, _) if !normal.contains(m) => None,
            (_, KeyCode::Char('w' | 'k') | KeyCode::Up) => Some(Command::Up),
            (_, KeyCode::Char('s' | 'j') | KeyCode::Down) => Some(Command::Down),
            (_, KeyCode::Char('a' | 'h') | KeyCode::Left) => Some(Command::Left),
            (_, KeyCode::Char('d' | 'l') | KeyCode::Right) => Some(Command::Right),
            (_, KeyCode::Char('p' | 'P') | KeyCode::Esc) => Some(Command::Pause),
            (_, KeyCode::Char('q')) => Some(Command::Quit),
            _ => None,
        }
    }
}
