//! Terminal key handling for the game screen.
//!
//! Maps raw crossterm key events onto the two logical inputs the session
//! understands.

use crate::game::GameInput;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate one key event. Releases, repeats and unbound keys map to `None`.
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(GameInput::QuitRequested)
        }
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => Some(GameInput::ImpulseOrRestart),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameInput::QuitRequested),
        _ => None,
    }
}

/// Translate any terminal event. Only key events carry game input.
pub fn map_event(event: &Event) -> Option<GameInput> {
    match event {
        Event::Key(key) => map_key(*key),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_action_keys() {
        for code in [KeyCode::Char(' '), KeyCode::Up, KeyCode::Enter] {
            assert_eq!(map_key(press(code)), Some(GameInput::ImpulseOrRestart));
        }
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char('Q')] {
            assert_eq!(map_key(press(code)), Some(GameInput::QuitRequested));
        }
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(GameInput::QuitRequested));
    }

    #[test]
    fn test_plain_c_ignored() {
        assert_eq!(map_key(press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_unbound_keys_ignored() {
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
        assert_eq!(map_key(press(KeyCode::Left)), None);
    }

    #[test]
    fn test_release_ignored() {
        let key = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(key), None);
    }

    #[test]
    fn test_non_key_events_ignored() {
        assert_eq!(map_event(&Event::Resize(80, 24)), None);
        assert_eq!(
            map_event(&Event::Key(press(KeyCode::Char(' ')))),
            Some(GameInput::ImpulseOrRestart)
        );
    }
}
