//! Main update function - handles state transitions (TEA pattern)
//!
//! Handler implementations live in:
//! - `keys`: Key event handlers for UI modes
//! - `lifecycle`: Focus and app lifecycle handlers

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::loading::LoadingViewService;
use crate::manager::SdkManager;
use crate::message::Message;
use crate::state::{ShellState, UiMode};

use super::{keys::handle_key, lifecycle, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut ShellState, manager: &SdkManager, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::FocusGained => lifecycle::handle_focus_gained(state, manager),
        Message::FocusLost => lifecycle::handle_focus_lost(state, manager),
        Message::Lifecycle(event) => lifecycle::handle_lifecycle(state, manager, event),

        Message::Tick => {
            if state.ui_mode == UiMode::Launching {
                LoadingViewService::shared().update(|view| view.tick(Instant::now()));
            }

            // Dev actions can only request navigation; the requests are
            // collected here so mode changes stay inside the update loop
            if manager.take_dev_dialog_request() {
                return UpdateResult::message(Message::ShowDevDialog);
            }
            if manager.take_dev_info_request() {
                return UpdateResult::message(Message::ShowDevInfo);
            }

            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Launch pipeline results
        // ─────────────────────────────────────────────────────────
        Message::LaunchSucceeded { actions } => {
            state.last_launch_actions = Some(actions);
            state.launch_error = None;
            state.current_user = manager.current_account();
            // Boot config adoption may have changed the display name
            state.display_name = manager.app_display_name();
            state.ui_mode = UiMode::Normal;
            LoadingViewService::shared().hide();
            UpdateResult::none()
        }

        Message::LaunchFailed { message } => {
            state.launch_error = Some(message);
            state.ui_mode = UiMode::LaunchFailed;
            LoadingViewService::shared().hide();
            UpdateResult::none()
        }

        Message::RetryLaunch => {
            if manager.is_launching() {
                warn!("Retry ignored; a launch is already in progress");
                return UpdateResult::none();
            }

            info!("Retrying launch");
            state.ui_mode = UiMode::Launching;
            state.launch_error = None;
            LoadingViewService::shared().show_with_rotation(
                state.settings.loading.title.clone(),
                "",
                Duration::from_millis(state.settings.loading.rotation_ms),
            );
            UpdateResult::action(UpdateAction::SpawnLaunch)
        }

        // ─────────────────────────────────────────────────────────
        // Dev support UI
        // ─────────────────────────────────────────────────────────
        Message::ShowDevDialog => {
            if !manager.is_dev_support_enabled() {
                warn!("Dev support is disabled; dialog not shown");
                return UpdateResult::none();
            }

            let titles = manager
                .dev_actions()
                .into_iter()
                .map(|action| action.title)
                .collect();
            state.open_dev_dialog(titles);
            UpdateResult::none()
        }

        Message::CloseDevDialog => {
            state.close_dev_dialog();
            UpdateResult::none()
        }

        Message::DevDialogUp => {
            if let Some(dialog) = state.dev_dialog.as_mut() {
                dialog.up();
            }
            UpdateResult::none()
        }

        Message::DevDialogDown => {
            if let Some(dialog) = state.dev_dialog.as_mut() {
                dialog.down();
            }
            UpdateResult::none()
        }

        Message::DevDialogSelect => {
            let selected = state
                .dev_dialog
                .as_ref()
                .and_then(|dialog| dialog.selected_title().map(str::to_string));
            state.close_dev_dialog();

            if let Some(title) = selected {
                if let Some(action) = manager
                    .dev_actions()
                    .into_iter()
                    .find(|action| action.title == title)
                {
                    action.run(manager);
                }
            }

            // Refresh mirrors the action may have touched
            state.current_user = manager.current_account();
            state.snapshot_active = manager.snapshot_active();
            state.snapshot_spec = manager.active_snapshot();

            if manager.take_dev_info_request() {
                return UpdateResult::message(Message::ShowDevInfo);
            }
            UpdateResult::none()
        }

        Message::ShowDevInfo => {
            if !manager.is_dev_support_enabled() {
                warn!("Dev support is disabled; info screen not shown");
                return UpdateResult::none();
            }

            state.dev_infos = manager.dev_support_infos();
            state.ui_mode = UiMode::DevInfo;
            UpdateResult::none()
        }

        Message::CloseDevInfo => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Account control
        // ─────────────────────────────────────────────────────────
        Message::Logout => {
            manager.logout();
            state.current_user = None;
            UpdateResult::none()
        }

        Message::Quit => {
            state.should_quit = true;
            UpdateResult::action(UpdateAction::Quit)
        }
    }
}
