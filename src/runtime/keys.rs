use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::InputMode;
use crate::mpris::ControlCmd;

/// What a key press asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Same path as the MPRIS remote.
    Control(ControlCmd),
    ToggleShuffle,
    ToggleControls,
    OpenPrompt,
    PromptChar(char),
    PromptBackspace,
    PromptConfirm,
    PromptCancel,
}

pub fn key_action(key: &KeyEvent, mode: InputMode) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Control(ControlCmd::Quit));
    }

    match mode {
        InputMode::FolderPrompt => match key.code {
            KeyCode::Esc => Some(Action::PromptCancel),
            KeyCode::Enter => Some(Action::PromptConfirm),
            KeyCode::Backspace => Some(Action::PromptBackspace),
            KeyCode::Char(c) if !c.is_control() => Some(Action::PromptChar(c)),
            _ => None,
        },
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(Action::Control(ControlCmd::Quit)),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::Control(ControlCmd::Prev)),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::Control(ControlCmd::Next)),
            KeyCode::Char('p') | KeyCode::Char(' ') => {
                Some(Action::Control(ControlCmd::PlayPause))
            }
            KeyCode::Char('x') => Some(Action::Control(ControlCmd::Stop)),
            KeyCode::Char('s') => Some(Action::ToggleShuffle),
            KeyCode::Char('o') => Some(Action::OpenPrompt),
            KeyCode::Char('?') => Some(Action::ToggleControls),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn transport_keys_map_to_control_commands() {
        let n = InputMode::Normal;
        assert_eq!(
            key_action(&press(KeyCode::Char('h')), n),
            Some(Action::Control(ControlCmd::Prev))
        );
        assert_eq!(
            key_action(&press(KeyCode::Right), n),
            Some(Action::Control(ControlCmd::Next))
        );
        assert_eq!(
            key_action(&press(KeyCode::Char(' ')), n),
            Some(Action::Control(ControlCmd::PlayPause))
        );
        assert_eq!(
            key_action(&press(KeyCode::Char('q')), n),
            Some(Action::Control(ControlCmd::Quit))
        );
        assert_eq!(key_action(&press(KeyCode::Char('z')), n), None);
    }

    #[test]
    fn prompt_captures_printable_keys() {
        let m = InputMode::FolderPrompt;
        assert_eq!(
            key_action(&press(KeyCode::Char('q')), m),
            Some(Action::PromptChar('q'))
        );
        assert_eq!(key_action(&press(KeyCode::Esc), m), Some(Action::PromptCancel));
        assert_eq!(key_action(&press(KeyCode::Enter), m), Some(Action::PromptConfirm));
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for mode in [InputMode::Normal, InputMode::FolderPrompt] {
            assert_eq!(
                key_action(&key, mode),
                Some(Action::Control(ControlCmd::Quit))
            );
        }
    }
}
