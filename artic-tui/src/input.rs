//! Key bindings.

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    CursorUp,
    CursorDown,
    ToggleRow,
    SelectPage,
    FirstPage,
    PrevPage,
    NextPage,
    LastPage,
    Reload,
    ToggleOverlay,
    CloseOverlay,
    CountDigit(char),
    CountBackspace,
    SubmitCount,
}

/// Maps a key event to an action. The count overlay captures input while
/// it is open.
pub fn action_for(key: KeyEvent, overlay_open: bool) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if overlay_open {
        return match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => Some(Action::CountDigit(c)),
            KeyCode::Backspace => Some(Action::CountBackspace),
            KeyCode::Enter => Some(Action::SubmitCount),
            KeyCode::Esc | KeyCode::Char('n') => Some(Action::CloseOverlay),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown),
        KeyCode::Char(' ') => Some(Action::ToggleRow),
        KeyCode::Char('a') => Some(Action::SelectPage),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::FirstPage),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevPage),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::NextPage),
        KeyCode::End | KeyCode::Char('G') => Some(Action::LastPage),
        KeyCode::Char('r') => Some(Action::Reload),
        KeyCode::Char('n') => Some(Action::ToggleOverlay),
        _ => None,
    }
}

/// Edits the overlay's count buffer. Returns the parsed count, `None` when
/// the buffer does not hold an integer.
pub fn edit_count(buffer: &mut String, action: Action) -> Option<i64> {
    match action {
        Action::CountDigit('-') if buffer.is_empty() => buffer.push('-'),
        Action::CountDigit(c) if c.is_ascii_digit() && buffer.len() < 18 => buffer.push(c),
        Action::CountBackspace => {
            buffer.pop();
        }
        _ => {}
    }
    buffer.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_table_keys() {
        assert_eq!(action_for(press(KeyCode::Char(' ')), false), Some(Action::ToggleRow));
        assert_eq!(action_for(press(KeyCode::Right), false), Some(Action::NextPage));
        assert_eq!(action_for(press(KeyCode::Char('n')), false), Some(Action::ToggleOverlay));
        assert_eq!(action_for(press(KeyCode::Char('5')), false), None);
    }

    #[test]
    fn test_esc_after_closing_overlay_does_not_quit() {
        assert_eq!(action_for(press(KeyCode::Esc), true), Some(Action::CloseOverlay));
        assert_eq!(action_for(press(KeyCode::Esc), false), None);
        assert_eq!(action_for(press(KeyCode::Char('q')), false), Some(Action::Quit));
    }

    #[test]
    fn test_overlay_captures_digits() {
        assert_eq!(
            action_for(press(KeyCode::Char('5')), true),
            Some(Action::CountDigit('5'))
        );
        assert_eq!(action_for(press(KeyCode::Enter), true), Some(Action::SubmitCount));
        assert_eq!(action_for(press(KeyCode::Esc), true), Some(Action::CloseOverlay));
        assert_eq!(action_for(press(KeyCode::Char('q')), true), None);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(key, true), Some(Action::Quit));
    }

    #[test]
    fn test_edit_count() {
        let mut buffer = String::new();
        assert_eq!(edit_count(&mut buffer, Action::CountDigit('1')), Some(1));
        assert_eq!(edit_count(&mut buffer, Action::CountDigit('5')), Some(15));
        assert_eq!(edit_count(&mut buffer, Action::CountDigit('-')), Some(15));
        assert_eq!(edit_count(&mut buffer, Action::CountBackspace), Some(1));
        assert_eq!(edit_count(&mut buffer, Action::CountBackspace), None);

        assert_eq!(edit_count(&mut buffer, Action::CountDigit('-')), None);
        assert_eq!(edit_count(&mut buffer, Action::CountDigit('3')), Some(-3));
    }
}
