//! Messages driving the shell state machine
//!
//! Every input the shell reacts to arrives as a `Message`: key presses,
//! terminal focus changes, app lifecycle events, and launch pipeline
//! results. The update function in `handler` is the only consumer.

use twarden_core::{LaunchActions, LifecycleEvent};

use crate::input_key::InputKey;

/// Events processed by the shell update loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard input (already abstracted from the terminal library)
    Key(InputKey),

    /// Terminal gained focus
    FocusGained,

    /// Terminal lost focus
    FocusLost,

    /// An app lifecycle transition, fed to the SDK manager's delegates
    Lifecycle(LifecycleEvent),

    /// Periodic timer for spinner animation
    Tick,

    // ─────────────────────────────────────────────────────────
    // Launch pipeline results
    // ─────────────────────────────────────────────────────────
    /// The launch pipeline completed successfully
    LaunchSucceeded { actions: LaunchActions },

    /// The launch pipeline failed; `message` is the rendered error
    LaunchFailed { message: String },

    /// Start the launch sequence again after a failure
    RetryLaunch,

    // ─────────────────────────────────────────────────────────
    // Dev support UI
    // ─────────────────────────────────────────────────────────
    /// Open the dev support action dialog
    ShowDevDialog,

    /// Close the dev support action dialog
    CloseDevDialog,

    /// Move the dev dialog selection up
    DevDialogUp,

    /// Move the dev dialog selection down
    DevDialogDown,

    /// Run the selected dev dialog action
    DevDialogSelect,

    /// Open the dev info screen
    ShowDevInfo,

    /// Close the dev info screen
    CloseDevInfo,

    // ─────────────────────────────────────────────────────────
    // Account control
    // ─────────────────────────────────────────────────────────
    /// Sign the current user out
    Logout,

    /// Exit the shell
    Quit,
}
