//! Message processing shared by the shell frontends
//!
//! Both the TUI and headless runners feed messages through the same chase
//! loop, so follow-up expansion and action dispatch behave identically no
//! matter which frontend is driving.

use tracing::warn;

use crate::handler::{self, UpdateAction};
use crate::manager::SdkManager;
use crate::message::Message;
use crate::state::ShellState;

/// Process a message through the TEA update function, chasing follow-up
/// messages until the chain settles.
pub fn process_message(state: &mut ShellState, manager: &'static SdkManager, message: Message) {
    let mut msg = Some(message);

    while let Some(m) = msg {
        let result = handler::update(state, manager, m);

        if let Some(action) = result.action {
            handle_action(action, manager);
        }

        msg = result.message;
    }
}

fn handle_action(action: UpdateAction, manager: &'static SdkManager) {
    match action {
        UpdateAction::SpawnLaunch => spawn_launch(manager),
        UpdateAction::Quit => {
            // should_quit is already set; the frontend loop exits on its own
        }
    }
}

/// Run the launch pipeline on a blocking thread. Must be called from
/// within a tokio runtime. The outcome is delivered through the manager's
/// launch hooks, not a return value.
pub fn spawn_launch(manager: &'static SdkManager) {
    tokio::task::spawn_blocking(move || {
        if !manager.launch() {
            warn!("Launch request ignored; another launch is in flight");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    use crate::config::ShellSettings;
    use crate::input_key::InputKey;
    use crate::state::UiMode;

    fn leaked_manager() -> &'static SdkManager {
        Box::leak(Box::new(SdkManager::new()))
    }

    fn state_in(mode: UiMode) -> ShellState {
        let mut state = ShellState::new(ShellSettings::default());
        state.ui_mode = mode;
        state
    }

    #[test]
    fn test_quit_key_chains_through_to_should_quit() {
        let mut state = state_in(UiMode::Normal);

        process_message(&mut state, leaked_manager(), Message::Key(InputKey::Char('q')));

        assert!(state.should_quit);
    }

    #[test]
    #[serial]
    fn test_launch_failure_enters_failure_mode() {
        let mut state = state_in(UiMode::Launching);

        process_message(
            &mut state,
            leaked_manager(),
            Message::LaunchFailed {
                message: "boot config missing".to_string(),
            },
        );

        assert_eq!(state.ui_mode, UiMode::LaunchFailed);
        assert_eq!(state.launch_error.as_deref(), Some("boot config missing"));
    }

    #[test]
    fn test_focus_loss_chain_raises_snapshot() {
        let manager = leaked_manager();
        let mut state = state_in(UiMode::Normal);

        process_message(&mut state, manager, Message::FocusLost);

        assert!(manager.snapshot_active());
        assert!(state.snapshot_active);
        assert!(state.snapshot_spec.is_some());
    }

    #[test]
    fn test_unmapped_key_changes_nothing() {
        let mut state = state_in(UiMode::Normal);

        process_message(&mut state, leaked_manager(), Message::Key(InputKey::Char('x')));

        assert!(!state.should_quit);
        assert_eq!(state.ui_mode, UiMode::Normal);
    }
}
