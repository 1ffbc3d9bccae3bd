/// Terminal key mapping for the full-screen UI
///
/// Arrow keys step the cursor directly, printable characters build up the
/// target label, Enter submits it.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::movement::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Manual single step
    Step(Move),
    /// Append a character to the label being typed
    Type(char),
    /// Delete the last typed character
    Erase,
    /// Submit the typed label
    Submit,
    Quit,
}

/// Map a terminal key event to a UI action
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Some platforms report releases too
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Esc => Some(Action::Quit),

        KeyCode::Up => Some(Action::Step(Move::Up)),
        KeyCode::Down => Some(Action::Step(Move::Down)),
        KeyCode::Left => Some(Action::Step(Move::Left)),
        KeyCode::Right => Some(Action::Step(Move::Right)),

        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Backspace => Some(Action::Erase),
        // Ctrl/Alt chords are not label input
        KeyCode::Char(c) if !c.is_control() && key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
            Some(Action::Type(c))
        }

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_map_key() {
        assert_eq!(map_key(press(KeyCode::Up)), Some(Action::Step(Move::Up)));
        assert_eq!(map_key(press(KeyCode::Right)), Some(Action::Step(Move::Right)));
        assert_eq!(map_key(press(KeyCode::Char('5'))), Some(Action::Type('5')));
        assert_eq!(map_key(press(KeyCode::Char('d'))), Some(Action::Type('d')));
        assert_eq!(map_key(press(KeyCode::Enter)), Some(Action::Submit));
        assert_eq!(map_key(press(KeyCode::Backspace)), Some(Action::Erase));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(map_key(press(KeyCode::F(1))), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Action::Quit));
    }

    #[test]
    fn test_modified_chars_not_typed() {
        let ctrl_d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_d), None);
        let alt_5 = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::ALT);
        assert_eq!(map_key(alt_5), None);

        let shifted = KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT);
        assert_eq!(map_key(shifted), Some(Action::Type('D')));
    }

    #[test]
    fn test_release_ignored() {
        let mut key = press(KeyCode::Char('5'));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key), None);
    }
}
