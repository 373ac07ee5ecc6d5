//! Callback hook slots for the SDK manager
//!
//! Hooks are stored as `Arc` closures so invocation can clone a handle out
//! of the slot lock before calling. A hook may therefore install or clear
//! hooks (including itself) without deadlocking.

use std::sync::Arc;

use twarden_core::{Error, LaunchActions, UserAccount};

use crate::auth::{LoginFlow, LoginFlowContext};
use crate::manager::snapshot::SnapshotSpec;

pub type PostLaunchHook = Arc<dyn Fn(LaunchActions) + Send + Sync>;
pub type LaunchErrorHook = Arc<dyn Fn(&Error) + Send + Sync>;
pub type PostLogoutHook = Arc<dyn Fn() + Send + Sync>;
pub type SwitchUserHook = Arc<dyn Fn(Option<&UserAccount>, &UserAccount) + Send + Sync>;
pub type PostForegroundHook = Arc<dyn Fn() + Send + Sync>;
pub type SnapshotCreateHook = Arc<dyn Fn() -> SnapshotSpec + Send + Sync>;
pub type SnapshotPresentHook = Arc<dyn Fn(&SnapshotSpec) + Send + Sync>;
pub type SnapshotDismissHook = Arc<dyn Fn(&SnapshotSpec) + Send + Sync>;
pub type UserAgentHook = Arc<dyn Fn(&str) -> String + Send + Sync>;
pub type PasscodeGateHook = Arc<dyn Fn() -> twarden_core::Result<()> + Send + Sync>;
pub type LoginFlowSelectionHook = Arc<dyn Fn(&LoginFlowContext) -> LoginFlow + Send + Sync>;
pub type UserSelectionHook = Arc<dyn Fn(&[UserAccount]) -> Option<UserAccount> + Send + Sync>;

/// All optional callback slots, in one bag behind the manager's lock
#[derive(Default)]
pub struct Hooks {
    /// Runs after a launch completes successfully
    pub post_launch: Option<PostLaunchHook>,
    /// Runs when the launch pipeline fails
    pub launch_error: Option<LaunchErrorHook>,
    /// Runs after `logout` clears the current account
    pub post_logout: Option<PostLogoutHook>,
    /// Runs when the current account changes; receives (old, new)
    pub switch_user: Option<SwitchUserHook>,
    /// Runs when the app returns to the foreground
    pub post_foreground: Option<PostForegroundHook>,
    /// Supplies the snapshot spec shown while backgrounded
    pub snapshot_create: Option<SnapshotCreateHook>,
    /// Custom presentation; honored only together with `snapshot_dismiss`
    pub snapshot_present: Option<SnapshotPresentHook>,
    /// Custom dismissal; honored only together with `snapshot_present`
    pub snapshot_dismiss: Option<SnapshotDismissHook>,
    /// Replaces the default user-agent builder
    pub user_agent: Option<UserAgentHook>,
    /// Credential verification gate run at the top of the launch pipeline
    pub passcode_gate: Option<PasscodeGateHook>,
    /// Chooses between local and identity-provider login flows
    pub idp_login_flow_selection: Option<LoginFlowSelectionHook>,
    /// Picks the account to resume among the stored ones
    pub idp_user_selection: Option<UserSelectionHook>,
}

impl std::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks")
            .field("post_launch", &self.post_launch.is_some())
            .field("launch_error", &self.launch_error.is_some())
            .field("post_logout", &self.post_logout.is_some())
            .field("switch_user", &self.switch_user.is_some())
            .field("post_foreground", &self.post_foreground.is_some())
            .field("snapshot_create", &self.snapshot_create.is_some())
            .field("snapshot_present", &self.snapshot_present.is_some())
            .field("snapshot_dismiss", &self.snapshot_dismiss.is_some())
            .field("user_agent", &self.user_agent.is_some())
            .field("passcode_gate", &self.passcode_gate.is_some())
            .field(
                "idp_login_flow_selection",
                &self.idp_login_flow_selection.is_some(),
            )
            .field("idp_user_selection", &self.idp_user_selection.is_some())
            .finish()
    }
}
