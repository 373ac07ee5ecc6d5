//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{ShellState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &ShellState, key: InputKey) -> Option<Message> {
    // Force quit works in every mode
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::Launching => handle_key_launching(key),
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::LaunchFailed => handle_key_launch_failed(key),
        UiMode::DevDialog => handle_key_dev_dialog(key),
        UiMode::DevInfo => handle_key_dev_info(key),
    }
}

/// Handle key events while the launch pipeline runs
fn handle_key_launching(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &ShellState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),

        // Dev support
        InputKey::Char('d') => Some(Message::ShowDevDialog),
        InputKey::Char('i') => Some(Message::ShowDevInfo),

        // Account control
        InputKey::Char('l') => Some(Message::Logout),

        // Simulated focus toggle, handy inside terminals without focus
        // reporting
        InputKey::Char('b') if state.backgrounded => Some(Message::FocusGained),
        InputKey::Char('b') => Some(Message::FocusLost),

        _ => None,
    }
}

/// Handle key events on the launch failure screen
fn handle_key_launch_failed(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('r') | InputKey::Enter => Some(Message::RetryLaunch),
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in the dev action dialog
fn handle_key_dev_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('q' | 'd') => Some(Message::CloseDevDialog),
        InputKey::Up | InputKey::Char('k') => Some(Message::DevDialogUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::DevDialogDown),
        InputKey::Enter => Some(Message::DevDialogSelect),
        _ => None,
    }
}

/// Handle key events on the dev info screen
fn handle_key_dev_info(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('q' | 'i') => Some(Message::CloseDevInfo),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_in(mode: UiMode) -> ShellState {
        let mut state = ShellState::default();
        state.ui_mode = mode;
        state
    }

    #[test]
    fn test_ctrl_c_quits_in_every_mode() {
        for mode in [
            UiMode::Launching,
            UiMode::Normal,
            UiMode::LaunchFailed,
            UiMode::DevDialog,
            UiMode::DevInfo,
        ] {
            let state = state_in(mode);
            assert_eq!(
                handle_key(&state, InputKey::CharCtrl('c')),
                Some(Message::Quit),
                "mode {mode:?}"
            );
        }
    }

    #[test]
    fn test_normal_mode_shortcuts() {
        let state = state_in(UiMode::Normal);
        assert_eq!(
            handle_key(&state, InputKey::Char('d')),
            Some(Message::ShowDevDialog)
        );
        assert_eq!(
            handle_key(&state, InputKey::Char('i')),
            Some(Message::ShowDevInfo)
        );
        assert_eq!(
            handle_key(&state, InputKey::Char('l')),
            Some(Message::Logout)
        );
        assert_eq!(
            handle_key(&state, InputKey::Char('b')),
            Some(Message::FocusLost)
        );
        assert_eq!(handle_key(&state, InputKey::Char('x')), None);
    }

    #[test]
    fn test_background_toggle_foregrounds_when_backgrounded() {
        let mut state = state_in(UiMode::Normal);
        state.backgrounded = true;

        assert_eq!(
            handle_key(&state, InputKey::Char('b')),
            Some(Message::FocusGained)
        );
    }

    #[test]
    fn test_retry_from_failure_screen() {
        let state = state_in(UiMode::LaunchFailed);
        assert_eq!(
            handle_key(&state, InputKey::Char('r')),
            Some(Message::RetryLaunch)
        );
        assert_eq!(
            handle_key(&state, InputKey::Enter),
            Some(Message::RetryLaunch)
        );
    }

    #[test]
    fn test_dev_dialog_navigation_keys() {
        let state = state_in(UiMode::DevDialog);
        assert_eq!(handle_key(&state, InputKey::Up), Some(Message::DevDialogUp));
        assert_eq!(
            handle_key(&state, InputKey::Char('j')),
            Some(Message::DevDialogDown)
        );
        assert_eq!(
            handle_key(&state, InputKey::Enter),
            Some(Message::DevDialogSelect)
        );
        assert_eq!(
            handle_key(&state, InputKey::Esc),
            Some(Message::CloseDevDialog)
        );
    }
}
