use crate::game::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Faster,
    Slower,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        let plain = ev.modifiers == KeyModifiers::NONE;
        // Punctuation may arrive with Shift held, depending on the layout
        let typed = (KeyModifiers::NONE | KeyModifiers::SHIFT).contains(ev.modifiers);
        match ev.code {
            KeyCode::Char('c') if ev.modifiers == KeyModifiers::CONTROL => Some(Command::Quit),
            KeyCode::Char('q') if plain => Some(Command::Quit),
            KeyCode::Esc => Some(Command::Quit),
            KeyCode::Char('w' | 'k') if plain => Some(Command::Up),
            KeyCode::Char('s' | 'j') if plain => Some(Command::Down),
            KeyCode::Char('a' | 'h') if plain => Some(Command::Left),
            KeyCode::Char('d' | 'l') if plain => Some(Command::Right),
            KeyCode::Up => Some(Command::Up),
            KeyCode::Down => Some(Command::Down),
            KeyCode::Left => Some(Command::Left),
            KeyCode::Right => Some(Command::Right),
            KeyCode::Char('+' | '=') if typed => Some(Command::Faster),
            KeyCode::Char('-' | '_') if typed => Some(Command::Slower),
            _ => None,
        }
    }

    /// The direction the snake should turn in response to this command, if
    /// any
    pub(crate) fn direction(self) -> Option<Direction> {
        match self {
            Command::Up => Some(Direction::Up),
            Command::Down => Some(Direction::Down),
            Command::Left => Some(Direction::Left),
            Command::Right => Some(Direction::Right),
            Command::Quit | Command::Faster | Command::Slower => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Up, KeyModifiers::NONE, Some(Command::Up))]
    #[case(KeyCode::Char('w'), KeyModifiers::NONE, Some(Command::Up))]
    #[case(KeyCode::Char('k'), KeyModifiers::NONE, Some(Command::Up))]
    #[case(KeyCode::Char('s'), KeyModifiers::NONE, Some(Command::Down))]
    #[case(KeyCode::Left, KeyModifiers::NONE, Some(Command::Left))]
    #[case(KeyCode::Char('l'), KeyModifiers::NONE, Some(Command::Right))]
    #[case(KeyCode::Char('+'), KeyModifiers::SHIFT, Some(Command::Faster))]
    #[case(KeyCode::Char('='), KeyModifiers::NONE, Some(Command::Faster))]
    #[case(KeyCode::Char('-'), KeyModifiers::NONE, Some(Command::Slower))]
    #[case(KeyCode::Char('q'), KeyModifiers::NONE, Some(Command::Quit))]
    #[case(KeyCode::Esc, KeyModifiers::NONE, Some(Command::Quit))]
    #[case(KeyCode::Char('c'), KeyModifiers::CONTROL, Some(Command::Quit))]
    #[case(KeyCode::Char('c'), KeyModifiers::NONE, None)]
    #[case(KeyCode::Char('w'), KeyModifiers::CONTROL, None)]
    #[case(KeyCode::Enter, KeyModifiers::NONE, None)]
    fn test_from_key_event(
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
        #[case] cmd: Option<Command>,
    ) {
        assert_eq!(Command::from_key_event(KeyEvent::new(code, modifiers)), cmd);
    }
}
