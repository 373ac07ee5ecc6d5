//! Focus and app lifecycle handlers
//!
//! Terminal focus changes are translated into the four app lifecycle
//! transitions here. Losing focus resigns active and, when the snapshot
//! setting asks for it, backgrounds the app; regaining focus walks the
//! app back to active, through foreground first if it was backgrounded.

use twarden_core::LifecycleEvent;

use crate::manager::SdkManager;
use crate::message::Message;
use crate::state::ShellState;

use super::UpdateResult;

/// Dispatch one lifecycle event to the manager and refresh the state
/// mirrors rendering reads from
pub fn apply_lifecycle(state: &mut ShellState, manager: &SdkManager, event: LifecycleEvent) {
    manager.handle_lifecycle_event(event);
    state.record_lifecycle(event);

    match event {
        LifecycleEvent::DidEnterBackground => state.backgrounded = true,
        LifecycleEvent::WillEnterForeground => state.backgrounded = false,
        LifecycleEvent::WillResignActive | LifecycleEvent::DidBecomeActive => {}
    }
    state.snapshot_active = manager.snapshot_active();
    state.snapshot_spec = manager.active_snapshot();
}

pub fn handle_lifecycle(
    state: &mut ShellState,
    manager: &SdkManager,
    event: LifecycleEvent,
) -> UpdateResult {
    apply_lifecycle(state, manager, event);
    UpdateResult::none()
}

/// Losing focus always resigns active; backgrounding follows only when
/// the snapshot-on-focus-loss setting is enabled
pub fn handle_focus_lost(state: &mut ShellState, manager: &SdkManager) -> UpdateResult {
    apply_lifecycle(state, manager, LifecycleEvent::WillResignActive);

    if state.settings.snapshot.on_focus_loss {
        UpdateResult::message(Message::Lifecycle(LifecycleEvent::DidEnterBackground))
    } else {
        UpdateResult::none()
    }
}

/// Regaining focus foregrounds first when the app was backgrounded, then
/// becomes active either way
pub fn handle_focus_gained(state: &mut ShellState, manager: &SdkManager) -> UpdateResult {
    if state.backgrounded {
        apply_lifecycle(state, manager, LifecycleEvent::WillEnterForeground);
    }
    UpdateResult::message(Message::Lifecycle(LifecycleEvent::DidBecomeActive))
}
